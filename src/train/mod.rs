pub mod gradients;
pub mod loss_report;
pub mod monitor;
pub mod train_config;
pub mod trainer;

pub use gradients::Gradients;
pub use loss_report::LossReport;
pub use monitor::LossMonitor;
pub use train_config::TrainConfig;
pub use trainer::{train, TrainReport, Trainer};
