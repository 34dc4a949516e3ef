use alloy::primitives::B256;

use crate::utils::helper::to_fixed;

/// Supply statistics computed after a burn
#[derive(Debug, Clone, PartialEq)]
pub struct BurnReport {
    /// Burned amount as a decimal string
    pub burned_amount: String,
    pub total_supply: f64,
    /// Balance held at the burn address
    pub burnt_tokens: f64,
    pub percent_burnt: f64,
    pub circulating_supply: f64,
    pub transaction_hash: Option<B256>,
}

impl BurnReport {
    /// Create a report, deriving the percentage and circulating supply.
    ///
    /// A zero total supply yields a zero percentage.
    pub fn new(burned_amount: String, total_supply: f64, burnt_tokens: f64) -> Self {
        let percent_burnt = if total_supply > 0.0 {
            (burnt_tokens / total_supply) * 100.0
        } else {
            0.0
        };

        Self {
            burned_amount,
            total_supply,
            burnt_tokens,
            percent_burnt,
            circulating_supply: total_supply - burnt_tokens,
            transaction_hash: None,
        }
    }

    /// Attach the hash of the burn transaction
    pub fn with_transaction_hash(mut self, hash: Option<B256>) -> Self {
        self.transaction_hash = hash;
        self
    }

    /// Percentage burnt, rounded to two decimals
    pub fn percent_burnt_display(&self) -> String {
        to_fixed(self.percent_burnt, 2)
    }

    /// Circulating supply, rounded to two decimals
    pub fn circulating_supply_display(&self) -> String {
        to_fixed(self.circulating_supply, 2)
    }

    /// Format the Markdown caption posted with the burn animation
    pub fn format_caption(&self) -> String {
        format!(
            "\n🔥 **Burn Alert** 🔥\n\
             {} tokens were burnt! 🏴‍☠️\n\
             🔥 **% Burnt Till Now:** {}%\n\
             💰 **Circulating Supply Left:** {} Tokens\n",
            self.burned_amount,
            self.percent_burnt_display(),
            self.circulating_supply_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_percentage_and_circulating_supply() {
        let report = BurnReport::new("10".to_string(), 1_000_000.0, 250_000.0);
        assert_eq!(report.percent_burnt, 25.0);
        assert_eq!(report.circulating_supply, 750_000.0);
        assert_eq!(report.percent_burnt_display(), "25.00");
        assert_eq!(report.circulating_supply_display(), "750000.00");
    }

    #[test]
    fn rounds_to_two_decimals() {
        let report = BurnReport::new("1".to_string(), 3.0, 1.0);
        assert_eq!(report.percent_burnt_display(), "33.33");
        assert_eq!(report.circulating_supply_display(), "2.00");
    }

    #[test]
    fn exact_ties_round_up() {
        let report = BurnReport::new("1".to_string(), 1000.125, 0.0);
        assert_eq!(report.circulating_supply_display(), "1000.13");

        let report = BurnReport::new("1".to_string(), 1000.5, 0.375);
        assert_eq!(report.circulating_supply_display(), "1000.13");
    }

    #[test]
    fn zero_total_supply_is_zero_percent() {
        let report = BurnReport::new("0".to_string(), 0.0, 0.0);
        assert_eq!(report.percent_burnt, 0.0);
        assert_eq!(report.percent_burnt_display(), "0.00");
    }

    #[test]
    fn caption_layout() {
        let report = BurnReport::new("1.5".to_string(), 1000.0, 100.0);
        let expected = "\n🔥 **Burn Alert** 🔥\n\
                        1.5 tokens were burnt! 🏴‍☠️\n\
                        🔥 **% Burnt Till Now:** 10.00%\n\
                        💰 **Circulating Supply Left:** 900.00 Tokens\n";
        assert_eq!(report.format_caption(), expected);
    }
}
