use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

pub fn info(msg: &str) {
    eprintln!("{}", msg);
}

pub fn label(key: &str, val: &str) {
    eprintln!("{} {}", format!("{}:", key).bold(), val);
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
