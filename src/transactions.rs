use std::io::{self, BufRead};

/// Streams transactions out of CSV-style input: one transaction per line,
/// items separated by commas. An empty line is an empty transaction (it is
/// still counted); empty tokens are dropped so stray commas do not mint
/// items.
pub struct TransactionReader<R> {
    input: R,
    line: String,
}

impl<R: BufRead> TransactionReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for TransactionReader<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line.clear();
        match self.input.read_line(&mut self.line) {
            Ok(0) => None,
            Ok(_) => {
                let tokens = self
                    .line
                    .trim_end_matches(['\n', '\r'])
                    .split(',')
                    .filter(|token| !token.is_empty())
                    .map(str::to_owned)
                    .collect();
                Some(Ok(tokens))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &str) -> Vec<Vec<String>> {
        TransactionReader::new(Cursor::new(input))
            .map(|t| t.unwrap())
            .collect()
    }

    #[test]
    fn splits_lines_on_commas() {
        let transactions = read_all("a,b,c\na\nb,c\n");
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0], vec!["a", "b", "c"]);
        assert_eq!(transactions[1], vec!["a"]);
        assert_eq!(transactions[2], vec!["b", "c"]);
    }

    #[test]
    fn empty_lines_are_empty_transactions() {
        let transactions = read_all("a,b\n\nc\n");
        assert_eq!(transactions.len(), 3);
        assert!(transactions[1].is_empty());
    }

    #[test]
    fn empty_tokens_are_dropped() {
        let transactions = read_all("a,,b\n,\n");
        assert_eq!(transactions[0], vec!["a", "b"]);
        assert!(transactions[1].is_empty());
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let transactions = read_all("a,b\nc");
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1], vec!["c"]);
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        let transactions = read_all("a,b\r\nc\r\n");
        assert_eq!(transactions[0], vec!["a", "b"]);
        assert_eq!(transactions[1], vec!["c"]);
    }
}
