//! Analysis report generation.

use serde::{Deserialize, Serialize};
use ta_core::types::{DerivedSeries, LatestIndicators, Period, PriceSeries, Sentiment, Signal};

use crate::format::{format_change, format_currency, format_volume};
use crate::summary::QuoteSummary;

const RULE: &str = "═══════════════════════════════════════════════════════════\n";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────\n";

/// Complete result of analyzing one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Symbol analyzed
    pub symbol: String,
    /// Lookback period
    pub period: Period,
    /// Quote headline numbers
    pub summary: QuoteSummary,
    /// Last row of the indicator table
    pub latest: LatestIndicators,
    /// Classified signals, in evaluation order
    pub signals: Vec<Signal>,
}

impl AnalysisReport {
    /// Assemble a report; `None` when the series is empty.
    pub fn new(
        series: &PriceSeries,
        period: Period,
        derived: &DerivedSeries,
        signals: Vec<Signal>,
    ) -> Option<Self> {
        Some(Self {
            symbol: series.symbol.clone(),
            period,
            summary: QuoteSummary::from_points(series)?,
            latest: derived.latest(),
            signals,
        })
    }

    /// Generate a text summary, prices shown with `currency`.
    pub fn summary(&self, currency: &str) -> String {
        let mut s = String::new();
        let price = |v: f64| format_currency(v, currency);
        let optional = |v: Option<f64>| match v {
            Some(v) => format!("{:.2}", v),
            None => "n/a".to_string(),
        };

        s.push_str(RULE);
        s.push_str(&format!(
            "  {} ({}) as of {}\n",
            self.symbol, self.period, self.summary.as_of
        ));
        s.push_str(RULE);
        s.push('\n');

        s.push_str("QUOTE\n");
        s.push_str(THIN_RULE);
        s.push_str(&format!(
            "  Current Price:       {}\n",
            price(self.summary.current_price)
        ));
        if let (Some(change), Some(pct)) = (self.summary.change, self.summary.change_pct) {
            s.push_str(&format!(
                "  Change:              {}\n",
                format_change(change, pct)
            ));
        }
        s.push_str(&format!(
            "  Volume:              {}\n",
            format_volume(self.summary.volume)
        ));
        s.push_str(&format!(
            "  Period Range:        {} - {}\n",
            price(self.summary.range_low),
            price(self.summary.range_high)
        ));
        s.push('\n');

        s.push_str("SIGNALS\n");
        s.push_str(THIN_RULE);
        for signal in &self.signals {
            let marker = match signal.kind.sentiment() {
                Sentiment::Positive => "+",
                Sentiment::Negative => "-",
                Sentiment::Caution => "!",
            };
            s.push_str(&format!(
                "  [{}] {:<18} {}\n",
                marker,
                signal.label(),
                signal.rationale
            ));
        }
        s.push('\n');

        s.push_str("INDICATORS\n");
        s.push_str(THIN_RULE);
        s.push_str(&format!("  MA20:                {}\n", optional(self.latest.ma20)));
        s.push_str(&format!("  MA50:                {}\n", optional(self.latest.ma50)));
        s.push_str(&format!("  MA200:               {}\n", optional(self.latest.ma200)));
        s.push_str(&format!("  RSI:                 {}\n", optional(self.latest.rsi)));
        s.push_str(&format!("  MACD:                {}\n", optional(self.latest.macd)));
        s.push_str(&format!(
            "  Signal Line:         {}\n",
            optional(self.latest.signal_line)
        ));
        s.push('\n');

        s.push_str(RULE);

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
