// Copyright (c) ZeroC, Inc.

//! String literal scanning. Escape sequences are decoded while scanning, so a string token
//! carries both its raw spelling (the lexeme) and its decoded byte value.

use super::chars;
use super::lexer::Lexer;
use super::tokens::TokenKind;
use crate::diagnostics::Error;

impl<'input, 'a> Lexer<'input, 'a> {
    /// Scans a string literal. The current byte is the opening quotation mark.
    ///
    /// The literal ends at the closing quotation mark, at an unescaped newline (diagnosed), or at
    /// the end of the input (diagnosed). A terminating newline is not consumed; it becomes trivia
    /// of the next token.
    pub(super) fn lex_string_literal(&mut self) -> TokenKind<'input> {
        self.advance(); // Consume the opening quotation mark.

        let mut value = Vec::new();
        loop {
            if self.really_at_end() {
                self.diagnose(Error::UnterminatedStringLiteral);
                break;
            }
            match self.peek() {
                b'"' => {
                    self.advance();
                    break;
                }
                b'\r' | b'\n' => {
                    self.diagnose(Error::NewlineInStringLiteral);
                    break;
                }
                b'\0' => {
                    let location = self.cursor();
                    self.advance();
                    self.diagnose_from(location, Error::EmbeddedNull);
                }
                b'\\' => self.scan_escape_sequence(&mut value),
                byte => {
                    value.push(byte);
                    self.advance();
                }
            }
        }

        TokenKind::StringLiteral(value)
    }

    /// Decodes a single escape sequence into `value`. The current byte is the backslash.
    fn scan_escape_sequence(&mut self, value: &mut Vec<u8>) {
        let start_location = self.cursor();
        self.advance(); // Consume the backslash.

        match self.peek() {
            // An escaped line ending is a line continuation; it decodes to nothing.
            b'\n' => self.advance(),
            b'\r' => {
                self.advance();
                self.consume(b'\n');
            }

            b'n' => self.decode_escape(value, b'\n'),
            b't' => self.decode_escape(value, b'\t'),
            b'\\' => self.decode_escape(value, b'\\'),
            b'"' => self.decode_escape(value, b'"'),
            b'v' => self.decode_escape(value, b'\x0B'),
            b'f' => self.decode_escape(value, b'\x0C'),
            b'a' => self.decode_escape(value, b'\x07'),

            // One to three octal digits.
            byte if chars::is_octal_digit(byte) => {
                let mut code: u32 = 0;
                for _ in 0..3 {
                    if !chars::is_octal_digit(self.peek()) {
                        break;
                    }
                    code = code * 8 + u32::from(chars::decimal_value(self.peek()));
                    self.advance();
                }
                if code > 255 {
                    self.diagnose_from(start_location, Error::OctalEscapeCodeTooBig { value: code });
                }
                value.push(code as u8);
            }

            // 'x' followed by one or two hex digits.
            b'x' => {
                self.advance();
                if !chars::is_hex_digit(self.peek()) {
                    self.diagnose_from(start_location, Error::InvalidHexEscapeCode);
                    // Recover by passing the 'x' through, like an unknown escape.
                    value.push(b'x');
                    return;
                }
                let mut code: u32 = 0;
                for _ in 0..2 {
                    if !chars::is_hex_digit(self.peek()) {
                        break;
                    }
                    code = code * 16 + u32::from(chars::hex_value(self.peek()));
                    self.advance();
                }
                value.push(code as u8);
            }

            // A backslash at the very end of the input; the outer loop reports the
            // unterminated literal.
            _ if self.really_at_end() => {}

            // Anything else is an unknown escape; the escaped character passes through.
            byte => {
                self.advance();
                self.diagnose_from(start_location, Error::UnknownEscapeCode { escape: char::from(byte) });
                value.push(byte);
            }
        }
    }

    /// Consumes the escape character and appends its decoded byte to `value`.
    fn decode_escape(&mut self, value: &mut Vec<u8>, decoded: u8) {
        self.advance();
        value.push(decoded);
    }
}
