/// Print the annotations stored for an image.
///
/// Usage: `boxtext-inspect <image> [--json]`
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use boxtext::store::SidecarStore;
    use boxtext::{EditSession, EditorConfig};

    let config = EditorConfig::load_from_default_path().unwrap_or_default();

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let mut image: Option<PathBuf> = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("Usage: boxtext-inspect <image> [--json]");
                return ExitCode::SUCCESS;
            }
            _ if image.is_none() => image = Some(PathBuf::from(arg)),
            _ => {
                eprintln!("Unexpected argument: {}", arg);
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(image) = image else {
        eprintln!("Usage: boxtext-inspect <image> [--json]");
        return ExitCode::FAILURE;
    };

    let store = SidecarStore::new();
    let mut session = EditSession::new(&config);
    if let Err(e) = session.open_image(&image, &store) {
        eprintln!("{}: {}", image.display(), e);
        return ExitCode::FAILURE;
    }

    if json {
        match session.shapes().encode() {
            Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
            Err(e) => {
                eprintln!("Failed to encode annotations: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        if let Some(info) = session.image() {
            println!("{} ({})", info.path.display(), info.size);
        }
        for (i, shape) in session.shapes().iter().enumerate() {
            println!("{:>4}  {}", i, shape);
        }
    }

    ExitCode::SUCCESS
}

// WASM builds embed the library and have no command line
#[cfg(target_arch = "wasm32")]
fn main() {}
