/// Prints the Dataverse API URLs a preview page would use.
///
/// Usage: `preview-urls <page-url | query-string>`
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use image_previewer::{LogLevel, PreviewParams, PreviewUrls, logging};
    use std::process::ExitCode;

    logging::init(LogLevel::Warn);

    let mut args = std::env::args().skip(1);
    let (Some(page_url), None) = (args.next(), args.next()) else {
        eprintln!("Usage: preview-urls <page-url | query-string>");
        return ExitCode::from(2);
    };

    let params = match PreviewParams::from_page_url(&page_url) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    for name in params.missing_required() {
        log::warn!("Missing query parameter '{}'", name);
    }

    let urls = PreviewUrls::build(&params);
    println!("file_url {}", urls.file_url);
    println!("version_url {}", urls.version_url);
    ExitCode::SUCCESS
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
