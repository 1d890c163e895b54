use queuelab::app;

fn main() {
    std::process::exit(app::startup::startup());
}
