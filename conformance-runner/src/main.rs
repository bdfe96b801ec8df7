mod app;
mod cli;
mod discovery;
mod execution;
mod metadata;
mod panic_message;
mod runner;
mod stats;

fn main() {
    std::process::exit(app::run());
}
