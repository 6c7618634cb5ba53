use crate::code_unit::CodeUnit;
use crate::error::{ParseError, Result};

/// Parse a port view to u16.
/// Only ASCII digits are accepted; no sign, whitespace or default-port
/// substitution.
pub fn parse_port<C: CodeUnit>(port: &[C]) -> Result<u16> {
    if port.is_empty() {
        return Err(ParseError::MissingPort);
    }

    port.iter().try_fold(0u16, |value, &unit| {
        let digit = unit
            .to_u32()
            .checked_sub(u32::from(b'0'))
            .filter(|digit| *digit <= 9)
            .ok_or(ParseError::InvalidPort)?;
        value
            .checked_mul(10)
            .and_then(|value| value.checked_add(digit as u16))
            .ok_or(ParseError::InvalidPort)
    })
}
