//! Logical-line tokenizer for BLIF text.
//!
//! BLIF is line-oriented: a logical line is a sequence of
//! whitespace-separated words, possibly spread over several physical
//! lines joined by a trailing `\`. A `#` starts a comment running to the
//! end of the physical line (and also ends the logical line). Blank
//! lines are skipped. Every word carries a [`Span`] for diagnostics.

use weft_source::{FileId, Span};

/// One whitespace-separated word of a logical line.
#[derive(Debug, Clone, Copy)]
pub struct Word<'src> {
    /// The word text, exactly as written.
    pub text: &'src str,
    /// Where the word sits in the input.
    pub span: Span,
}

/// One non-blank logical line.
#[derive(Debug, Clone)]
pub struct Line<'src> {
    /// The words of the line, in order. Never empty.
    pub words: Vec<Word<'src>>,
    /// A span from the first word to the last.
    pub span: Span,
}

/// Splits BLIF source text into logical lines of words.
pub struct LineLexer<'src> {
    source: &'src [u8],
    text: &'src str,
    pos: usize,
    file: FileId,
}

impl<'src> LineLexer<'src> {
    /// Creates a lexer over `text`, reporting positions in `file`.
    pub fn new(text: &'src str, file: FileId) -> Self {
        Self {
            source: text.as_bytes(),
            text,
            pos: 0,
            file,
        }
    }

    /// Returns the next non-blank logical line, or `None` at end of input.
    pub fn next_line(&mut self) -> Option<Line<'src>> {
        let mut words: Vec<Word<'src>> = Vec::new();
        loop {
            self.skip_blanks();
            if self.pos >= self.source.len() {
                break;
            }
            match self.source[self.pos] {
                b'#' => {
                    // Comment to the end of the physical line; it also
                    // terminates the logical line.
                    self.skip_to_newline();
                    if !words.is_empty() {
                        break;
                    }
                }
                b'\n' => {
                    self.pos += 1;
                    if !words.is_empty() {
                        break;
                    }
                }
                b'\\' if self.newline_follows(self.pos + 1) => {
                    // Continuation: the logical line resumes on the next
                    // physical line.
                    self.pos += 1;
                    self.skip_to_newline();
                    self.pos += 1;
                }
                _ => {
                    words.push(self.read_word());
                }
            }
        }
        if words.is_empty() {
            return None;
        }
        let span = words[0].span.to(words[words.len() - 1].span);
        Some(Line { words, span })
    }

    /// Returns an empty span at the end of the input, for diagnostics
    /// raised once everything has been consumed.
    pub fn eof_span(&self) -> Span {
        let end = self.source.len() as u32;
        Span::new(self.file, end, end)
    }

    fn skip_blanks(&mut self) {
        while self.pos < self.source.len() {
            match self.source[self.pos] {
                b' ' | b'\t' | b'\r' => self.pos += 1,
                _ => break,
            }
        }
    }

    fn skip_to_newline(&mut self) {
        while self.pos < self.source.len() && self.source[self.pos] != b'\n' {
            self.pos += 1;
        }
    }

    fn newline_follows(&self, mut at: usize) -> bool {
        if at < self.source.len() && self.source[at] == b'\r' {
            at += 1;
        }
        at >= self.source.len() || self.source[at] == b'\n'
    }

    fn read_word(&mut self) -> Word<'src> {
        let start = self.pos;
        while self.pos < self.source.len() {
            match self.source[self.pos] {
                b' ' | b'\t' | b'\r' | b'\n' | b'#' => break,
                b'\\' if self.newline_follows(self.pos + 1) => break,
                _ => self.pos += 1,
            }
        }
        Word {
            text: &self.text[start..self.pos],
            span: Span::new(self.file, start as u32, self.pos as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<Vec<String>> {
        let mut lexer = LineLexer::new(text, FileId::from_raw(0));
        let mut out = Vec::new();
        while let Some(line) = lexer.next_line() {
            out.push(line.words.iter().map(|w| w.text.to_string()).collect());
        }
        out
    }

    #[test]
    fn words_per_line() {
        assert_eq!(
            lines(".model top\n.inputs a b\n"),
            vec![vec![".model", "top"], vec![".inputs", "a", "b"]]
        );
    }

    #[test]
    fn blank_lines_skipped() {
        assert_eq!(
            lines("\n\n.model top\n\n\n.end\n"),
            vec![vec![".model", "top"], vec![".end"]]
        );
    }

    #[test]
    fn comments_stripped() {
        assert_eq!(
            lines("# header\n.model top # trailing\n.inputs a#glued\n"),
            vec![vec![".model", "top"], vec![".inputs", "a"]]
        );
    }

    #[test]
    fn continuation_joins_physical_lines() {
        assert_eq!(
            lines(".inputs a b \\\n  c d\n.end\n"),
            vec![vec![".inputs", "a", "b", "c", "d"], vec![".end"]]
        );
    }

    #[test]
    fn continuation_with_crlf() {
        assert_eq!(
            lines(".inputs a \\\r\n b\r\n"),
            vec![vec![".inputs", "a", "b"]]
        );
    }

    #[test]
    fn backslash_inside_word_is_kept() {
        // Escaped Verilog names survive as-is; only a line-final
        // backslash is a continuation.
        assert_eq!(lines(".inputs \\reg[0]\n"), vec![vec![".inputs", "\\reg[0]"]]);
    }

    #[test]
    fn no_trailing_newline() {
        assert_eq!(lines(".end"), vec![vec![".end"]]);
    }

    #[test]
    fn continuation_at_end_of_input() {
        assert_eq!(lines(".inputs a \\"), vec![vec![".inputs", "a"]]);
    }

    #[test]
    fn empty_input() {
        assert!(lines("").is_empty());
        assert!(lines("\n  \n# only comments\n").is_empty());
    }

    #[test]
    fn spans_point_at_words() {
        let mut lexer = LineLexer::new(".model top\n", FileId::from_raw(0));
        let line = lexer.next_line().unwrap();
        assert_eq!(line.words[0].span.start, 0);
        assert_eq!(line.words[0].span.end, 6);
        assert_eq!(line.words[1].span.start, 7);
        assert_eq!(line.words[1].span.end, 10);
        assert_eq!(line.span.start, 0);
        assert_eq!(line.span.end, 10);
    }

    #[test]
    fn eof_span_is_at_end() {
        let mut lexer = LineLexer::new(".end\n", FileId::from_raw(0));
        lexer.next_line();
        let span = lexer.eof_span();
        assert_eq!(span.start, 5);
        assert_eq!(span.end, 5);
    }
}
