//! CSV tokenizer.
//!
//! Lenient, RFC-4180-flavoured parse used for preview rendering. Quoted
//! fields may contain separators and row terminators; a doubled quote inside
//! a quoted field decodes to one literal quote. `\r\n` counts as a single
//! row terminator. Malformed input never errors: an unterminated quote just
//! accumulates the rest of the text into the current field.

/// Parses raw CSV text into rows of fields.
///
/// Pure and total: the same input always yields the same rows, and empty
/// input yields no rows. A trailing partial row (input not ending in a
/// terminator) is emitted; a trailing terminator does not produce a phantom
/// empty row.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // escaped quote
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // last field
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
