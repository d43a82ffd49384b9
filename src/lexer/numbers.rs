// Copyright (c) ZeroC, Inc.

//! Numeric literal scanning: plain integers, real literals, and sized/unsized vector literals
//! with four-valued digits.

use super::chars;
use super::lexer::Lexer;
use super::tokens::*;
use crate::diagnostics::Error;

/// Powers of ten for composing real literals by binary decomposition of the exponent:
/// 10^1, 10^2, 10^4, ..., 10^256.
const POWERS_OF_TEN: [f64; 9] = [1e1, 1e2, 1e4, 1e8, 1e16, 1e32, 1e64, 1e128, 1e256];

/// The number of most-significant mantissa digits kept while scanning. Further digits are still
/// counted (they shift the decimal point) but no longer accumulated: truncation is intentional
/// for 32-bit integers and harmless for doubles.
const MAX_MANTISSA_DIGITS: u32 = 18;

/// Real exponent magnitudes are clamped to this before composition. Anything larger is already
/// far outside the range of a double.
const MAX_REAL_EXPONENT: u32 = 511;

impl<'input, 'a> Lexer<'input, 'a> {
    /// Scans a literal that starts with a decimal digit: a plain integer, the size of a sized
    /// vector literal, or the mantissa of a real literal. Which one it is depends on what follows
    /// the digits.
    pub(super) fn lex_numeric_literal(&mut self) -> TokenKind<'input> {
        // Skip leading zeros.
        while self.peek() == b'0' {
            self.advance();
        }

        let mut value: u64 = 0;
        let mut digits: u32 = 0;
        self.scan_decimal_digits(&mut value, &mut digits);

        match self.peek() {
            b'.' => return self.lex_real_literal(value, digits),
            b'e' | b'E' => return self.lex_real_exponent(value, digits, digits),
            _ => {}
        }

        // A vector size may be separated from its apostrophe by horizontal whitespace.
        // "'{" never starts a vector literal; it's the assignment-pattern token.
        let mut lookahead = 0;
        while chars::is_horizontal_whitespace(self.peek_by(lookahead)) {
            lookahead += 1;
        }
        if self.peek_by(lookahead) == b'\'' && self.peek_by(lookahead + 1) != b'{' {
            self.advance_by(lookahead + 1); // Consume the whitespace and the apostrophe.
            return self.lex_sized_vector(value);
        }

        // Just a plain decimal literal, stored as a signed 32-bit integer.
        if value > i32::MAX as u64 {
            self.diagnose(Error::SignedLiteralTooLarge { value });
            return TokenKind::IntegerLiteral(IntegerValue::Integer(i32::MAX));
        }
        TokenKind::IntegerLiteral(IntegerValue::Integer(value as i32))
    }

    /// Scans an apostrophe in normal token position: the "'{" assignment-pattern token, an
    /// unsized vector or single-bit literal, or a lone apostrophe (used by cast syntax).
    pub(super) fn lex_apostrophe(&mut self) -> TokenKind<'input> {
        self.advance(); // Consume the apostrophe.
        match self.peek() {
            b'{' => {
                self.advance();
                TokenKind::ApostropheLeftBrace
            }
            b'0' | b'1' => {
                let digit = chars::decimal_value(self.peek());
                self.advance();
                TokenKind::IntegerLiteral(IntegerValue::SingleBit(LogicDigit::Value(digit)))
            }
            b'x' | b'X' => {
                self.advance();
                TokenKind::IntegerLiteral(IntegerValue::SingleBit(LogicDigit::X))
            }
            b'z' | b'Z' => {
                self.advance();
                TokenKind::IntegerLiteral(IntegerValue::SingleBit(LogicDigit::Z))
            }
            _ => {
                if let Some(base) = self.scan_vector_base() {
                    let digits = self.scan_vector_digits(base);
                    TokenKind::IntegerLiteral(IntegerValue::Vector(LogicVector {
                        size: None,
                        signed: false,
                        base,
                        digits,
                    }))
                } else {
                    self.diagnose(Error::InvalidUnsizedLiteral);
                    TokenKind::Apostrophe
                }
            }
        }
    }

    /// Scans the remainder of a sized vector literal. The size and its apostrophe have already
    /// been consumed.
    fn lex_sized_vector(&mut self, size_value: u64) -> TokenKind<'input> {
        let signed = matches!(self.peek(), b's' | b'S');
        if signed {
            self.advance();
        }

        let Some(base) = self.scan_vector_base() else {
            self.diagnose(Error::MissingVectorBase);
            // Fall back to a plain integer carrying the size's value. The consumed size,
            // whitespace, and apostrophe stay in the lexeme, so the token stream still covers
            // every input byte.
            return if size_value > i32::MAX as u64 {
                self.diagnose(Error::SignedLiteralTooLarge { value: size_value });
                TokenKind::IntegerLiteral(IntegerValue::Integer(i32::MAX))
            } else {
                TokenKind::IntegerLiteral(IntegerValue::Integer(size_value as i32))
            };
        };

        let size = if size_value == 0 {
            self.diagnose(Error::IntegerSizeZero);
            0
        } else if size_value > u32::MAX as u64 {
            self.diagnose(Error::IntegerSizeTooLarge);
            u32::MAX
        } else {
            size_value as u32
        };

        let digits = self.scan_vector_digits(base);
        TokenKind::IntegerLiteral(IntegerValue::Vector(LogicVector {
            size: Some(size),
            signed,
            base,
            digits,
        }))
    }

    /// Scans a base specifier character and returns its base, or `None` if the current byte
    /// isn't a base specifier (nothing is consumed in that case).
    fn scan_vector_base(&mut self) -> Option<NumericBase> {
        let base = match self.peek() {
            b'd' | b'D' => NumericBase::Decimal,
            b'o' | b'O' => NumericBase::Octal,
            b'h' | b'H' => NumericBase::Hex,
            b'b' | b'B' => NumericBase::Binary,
            _ => return None,
        };
        self.advance();
        Some(base)
    }

    /// Scans the digits of a vector literal. The digit and value functions are supplied per base
    /// so the one loop serves all four bases.
    ///
    /// Digits may be separated from the base specifier by horizontal whitespace. At least one
    /// digit is required; underscores are ignored; 'x'/'X' and 'z'/'Z'/'?' are the four-valued
    /// digits. Scanning stops at the first byte that fits none of these, without consuming it.
    fn scan_vector_digits(&mut self, base: NumericBase) -> Vec<LogicDigit> {
        let (is_digit, digit_value): (fn(u8) -> bool, fn(u8) -> u8) = match base {
            NumericBase::Binary => (chars::is_binary_digit, chars::decimal_value),
            NumericBase::Octal => (chars::is_octal_digit, chars::decimal_value),
            NumericBase::Decimal => (chars::is_decimal_digit, chars::decimal_value),
            NumericBase::Hex => (chars::is_hex_digit, chars::hex_value),
        };

        while chars::is_horizontal_whitespace(self.peek()) {
            self.advance();
        }

        if !is_digit(self.peek()) && !chars::is_logic_digit(self.peek()) {
            self.diagnose(Error::MissingVectorDigits);
            return Vec::new();
        }

        let mut digits = Vec::new();
        loop {
            let byte = self.peek();
            if byte == b'_' {
                self.advance();
            } else if chars::is_logic_digit(byte) {
                digits.push(match byte {
                    b'x' | b'X' => LogicDigit::X,
                    _ => LogicDigit::Z,
                });
                self.advance();
            } else if is_digit(byte) {
                digits.push(LogicDigit::Value(digit_value(byte)));
                self.advance();
            } else {
                break;
            }
        }
        digits
    }

    /// Scans the fractional part of a real literal. The current byte is the decimal point.
    fn lex_real_literal(&mut self, mut value: u64, mut digits: u32) -> TokenKind<'input> {
        let dec_point = digits;
        self.advance(); // Consume the '.'.

        let digits_before_fraction = digits;
        self.scan_decimal_digits(&mut value, &mut digits);
        if digits == digits_before_fraction {
            self.diagnose(Error::MissingFractionalDigits);
        }

        if matches!(self.peek(), b'e' | b'E') {
            return self.lex_real_exponent(value, digits, dec_point);
        }

        let frac_exp = i64::from(dec_point) - i64::from(digits.min(MAX_MANTISSA_DIGITS));
        TokenKind::RealLiteral(self.compose_real(value, frac_exp))
    }

    /// Scans the exponent of a real literal. The current byte is the 'e' or 'E'.
    fn lex_real_exponent(&mut self, value: u64, digits: u32, dec_point: u32) -> TokenKind<'input> {
        self.advance(); // Consume the 'e'.

        // Skip leading zeros, then accept an optional sign, then require decimal digits.
        // The zeros count as exponent digits, so "1e0" lexes cleanly.
        let mut saw_leading_zeros = false;
        while self.peek() == b'0' {
            saw_leading_zeros = true;
            self.advance();
        }

        let negative = match self.peek() {
            b'+' => {
                self.advance();
                false
            }
            b'-' => {
                self.advance();
                true
            }
            _ => false,
        };

        let mut exp_value: u64 = 0;
        let mut exp_digits: u32 = 0;
        while chars::is_decimal_digit(self.peek()) {
            let digit = chars::decimal_value(self.peek());
            exp_value = exp_value.saturating_mul(10).saturating_add(u64::from(digit));
            exp_digits += 1;
            self.advance();
        }

        if exp_digits == 0 && !saw_leading_zeros {
            self.diagnose(Error::MissingExponentDigits);
        }

        let frac_exp = i64::from(dec_point) - i64::from(digits.min(MAX_MANTISSA_DIGITS));
        let exp_value = i64::try_from(exp_value).unwrap_or(i64::MAX);
        let exp = if negative {
            frac_exp.saturating_sub(exp_value)
        } else {
            frac_exp.saturating_add(exp_value)
        };
        TokenKind::RealLiteral(self.compose_real(value, exp))
    }

    /// Composes `value * 10^exp` by binary decomposition over [POWERS_OF_TEN], clamping the
    /// exponent's magnitude to [MAX_REAL_EXPONENT]. A non-finite result is diagnosed.
    fn compose_real(&mut self, value: u64, exp: i64) -> f64 {
        let magnitude = exp.unsigned_abs().min(u64::from(MAX_REAL_EXPONENT)) as u32;

        let mut scale = 1.0_f64;
        for (index, power) in POWERS_OF_TEN.iter().enumerate() {
            if magnitude & (1 << index) != 0 {
                scale *= power;
            }
        }

        let result = if exp < 0 {
            value as f64 / scale
        } else {
            value as f64 * scale
        };

        if !result.is_finite() {
            self.diagnose(Error::RealExponentTooLarge);
        }
        result
    }

    /// Scans a run of decimal digits and underscores. Underscores are ignored; digits past the
    /// first [MAX_MANTISSA_DIGITS] are counted but no longer accumulated into the value.
    fn scan_decimal_digits(&mut self, value: &mut u64, digits: &mut u32) {
        loop {
            let byte = self.peek();
            if byte == b'_' {
                self.advance();
            } else if chars::is_decimal_digit(byte) {
                if *digits < MAX_MANTISSA_DIGITS {
                    *value = *value * 10 + u64::from(chars::decimal_value(byte));
                }
                *digits += 1;
                self.advance();
            } else {
                break;
            }
        }
    }
}
