fn main() {
    if let Err(err) = skillfile::run() {
        skillfile::ui::error(&err.to_string());
        std::process::exit(1);
    }
}
