use ropey::Rope;

/// The text of one code cell of the worksheet.
pub struct CodeCell {
    pub buffer: Rope,
}

impl CodeCell {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
        }
    }

    pub fn words(&self) -> Vec<String> {
        words_in(&self.buffer)
    }
}

fn starts_word(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '%'
}

fn continues_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '%'
}

/// Every identifier occurrence in `text`, in order. Comments and string
/// literals are skipped; `\` escapes the next character into the word.
pub fn words_in(text: &Rope) -> Vec<String> {
    let mut words = Vec::new();
    let mut chars = text.chars().peekable();
    let mut current = String::new();

    while let Some(c) = chars.next() {
        let in_word = if current.is_empty() {
            starts_word(c)
        } else {
            continues_word(c)
        };
        if in_word || c == '\\' {
            current.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            continue;
        }

        if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        match c {
            '"' => {
                while let Some(next) = chars.next() {
                    match next {
                        '\\' => {
                            chars.next();
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut last = ' ';
                for next in chars.by_ref() {
                    if last == '*' && next == '/' {
                        break;
                    }
                    last = next;
                }
            }
            _ => {}
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
