pub mod bill;
pub mod config;
pub mod extra_charge;
pub mod money;
pub mod parse;
pub mod summary;

pub use bill::{BillDraft, LineItem, summary_props};
pub use config::{ConfigError, SummaryConfig};
pub use extra_charge::ExtraCharge;
pub use money::Currency;
pub use summary::{PriceSummary, PriceSummaryProps, StepDirection, SummaryView};
