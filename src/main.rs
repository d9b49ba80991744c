use aget_lint::core::error::AgetError;

fn main() {
    if let Err(err) = aget_lint::run() {
        eprintln!("aget-lint: {}", err);
        let code = match err {
            // Configuration errors: no meaningful scan was possible.
            AgetError::PathError(_) | AgetError::NotFound(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
