//! Escape processing for string and cset literals.

/// Process the body of a quoted literal (quotes already stripped).
///
/// Supports `\b \d \e \f \l \n \r \t \v \' \" \\`, `\xHH` (one or two hex
/// digits), `\ddd` (one to three octal digits) and `\^c` control
/// characters. Any other escaped character stands for itself.
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(esc) = chars.next() else {
            out.push('\\');
            break;
        };
        match esc {
            'b' => out.push('\u{8}'),
            'd' => out.push('\u{7f}'),
            'e' => out.push('\u{1b}'),
            'f' => out.push('\u{c}'),
            'l' | 'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{b}'),
            'x' => {
                let mut code = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    match chars.peek().and_then(|d| d.to_digit(16)) {
                        Some(d) => {
                            code = code * 16 + d;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    out.push('x');
                } else {
                    out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
                }
            }
            '0'..='7' => {
                let mut code = esc.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            code = code * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
            }
            '^' => match chars.next() {
                Some(ctl) => out.push(control_char(ctl)),
                None => out.push('^'),
            },
            other => out.push(other),
        }
    }

    out
}

/// `\^c`: the control character whose code is `c`'s low five bits.
fn control_char(c: char) -> char {
    let code = u32::from(c) & 0x1f;
    char::from_u32(code).unwrap_or(c)
}
