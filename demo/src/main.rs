fn main() {
    if let Err(err) = slidekit_demo::run() {
        tracing::error!("demo failed: {err}");
        std::process::exit(1);
    }
}
