//! Payment methods and card numbers validated per network
//!
//! The network selects which rule set applies, so a card number is a sum:
//! each case carries a number validated under that network's tag.

use std::fmt;

use modelkit_validator::prelude::*;
use serde::Serialize;

discriminant! {
    /// Supported card networks.
    pub enum CardNetwork {
        /// 16 digits, leading `4`.
        Visa => "visa",
        /// 15 digits, leading `34` or `37`.
        Amex => "amex",
    }
}

/// The Luhn mod-10 checksum holds.
pub fn luhn() -> Rule<str> {
    Rule::new("luhn", |input: &str| {
        let mut sum = 0;
        for (index, byte) in input.bytes().rev().enumerate() {
            if !byte.is_ascii_digit() {
                return false;
            }
            let digit = u32::from(byte - b'0');
            sum += if index % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            };
        }
        !input.is_empty() && sum % 10 == 0
    })
}

fn length(expected: usize) -> Rule<str> {
    Rule::new(format!("length({expected})"), move |input: &str| {
        input.len() == expected
    })
}

fn prefix(prefixes: &'static [&'static str]) -> Rule<str> {
    Rule::new(format!("prefix({})", prefixes.join("|")), move |input: &str| {
        prefixes.iter().any(|p| input.starts_with(p))
    })
}

refinement! {
    /// Visa card numbers.
    pub VisaRules for str => [ascii_digits(), length(16), prefix(&["4"]), luhn()]
}

refinement! {
    /// American Express card numbers.
    pub AmexRules for str => [ascii_digits(), length(15), prefix(&["34", "37"]), luhn()]
}

/// A card number valid for its network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CardNumber {
    /// A Visa number.
    Visa(Validated<String, VisaRules>),
    /// An American Express number.
    Amex(Validated<String, AmexRules>),
}

impl CardNumber {
    /// Validates `raw` under `network`'s rules. Spaces and dashes are ignored.
    pub fn parse(network: CardNetwork, raw: &str) -> ValidationResult<Self> {
        let digits: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
        match network {
            CardNetwork::Visa => Validated::new(digits).map(Self::Visa),
            CardNetwork::Amex => Validated::new(digits).map(Self::Amex),
        }
    }

    /// Parses the network from its tag, then validates the number.
    pub fn from_parts(network: &str, raw: &str) -> ModelResult<Self> {
        let network = CardNetwork::from_tag(network)?;
        Ok(Self::parse(network, raw)?)
    }

    /// The card's network.
    pub fn network(&self) -> CardNetwork {
        match self {
            Self::Visa(_) => CardNetwork::Visa,
            Self::Amex(_) => CardNetwork::Amex,
        }
    }

    /// The digits, without separators.
    pub fn digits(&self) -> &str {
        match self {
            Self::Visa(number) => number.as_str(),
            Self::Amex(number) => number.as_str(),
        }
    }

    /// The number with all but the last four digits hidden.
    pub fn masked(&self) -> String {
        let digits = self.digits();
        let visible = digits.len().saturating_sub(4);
        format!("{}{}", "*".repeat(visible), &digits[visible..])
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.network(), self.masked())
    }
}

/// How an order is paid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentMethod {
    /// Paid by card.
    Card(CardNumber),
    /// Paid in cash on delivery.
    Cash,
}

impl PaymentMethod {
    /// A short, masked description.
    pub fn describe(&self) -> String {
        match self {
            Self::Card(number) => format!("card {number}"),
            Self::Cash => "cash".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const VISA: &str = "4111 1111 1111 1111";
    const AMEX: &str = "3782-822463-10005";

    #[test]
    fn test_valid_numbers() {
        let visa = CardNumber::parse(CardNetwork::Visa, VISA).unwrap();
        assert_eq!(visa.network(), CardNetwork::Visa);
        assert_eq!(visa.digits(), "4111111111111111");

        let amex = CardNumber::from_parts("AMEX", AMEX).unwrap();
        assert_eq!(amex.network(), CardNetwork::Amex);
        assert_eq!(amex.masked(), "***********0005");
    }

    #[rstest]
    #[case(CardNetwork::Visa, "4111 1111 1111 111", "length(16)")]
    #[case(CardNetwork::Visa, "5111 1111 1111 1118", "prefix(4)")]
    #[case(CardNetwork::Visa, "4111 1111 1111 1112", "luhn")]
    #[case(CardNetwork::Visa, "4111 1111 1111 111x", "ascii_digits")]
    #[case(CardNetwork::Amex, VISA, "length(15)")]
    #[case(CardNetwork::Amex, "3582-822463-10005", "prefix(34|37)")]
    fn test_invalid_numbers(#[case] network: CardNetwork, #[case] raw: &str, #[case] rule: &str) {
        assert_eq!(
            CardNumber::parse(network, raw).unwrap_err().rule_name(),
            Some(rule)
        );
    }

    #[test]
    fn test_unknown_network() {
        let err = CardNumber::from_parts("discover", VISA).unwrap_err();
        assert_eq!(err.code(), "unknown_tag");
    }

    #[test]
    fn test_luhn() {
        assert!(luhn().holds("79927398713"));
        assert!(!luhn().holds("79927398710"));
        assert!(!luhn().holds(""));
    }

    #[test]
    fn test_describe_payment() {
        let card = CardNumber::parse(CardNetwork::Visa, VISA).unwrap();
        assert_eq!(
            PaymentMethod::Card(card).describe(),
            "card visa ************1111"
        );
        assert_eq!(PaymentMethod::Cash.describe(), "cash");
    }
}
