use crate::crossing::find_crossings;
use crate::errors::SearchError;
use crate::grid::Grid;
use crate::log::init_logger;
use crate::scanner::find_locations;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SearchError> for WasmError {
    fn from(e: SearchError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(e: &serde_wasm_bindgen::Error, code: &str) -> JsValue {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        details: "The search result could not be converted to JavaScript format.".to_string(),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// rows: string[] -> Grid
fn grid_from_js(rows: JsValue) -> Result<Grid, JsValue> {
    let rows: Vec<String> = serde_wasm_bindgen::from_value(rows).map_err(|e| {
        JsValue::from(WasmError {
            code: "WASM001".to_string(),
            message: format!("rows must be string[]: {e}"),
            details: "The rows parameter must be a JavaScript array of strings, one per grid row.".to_string(),
            help: Some("Ensure you're passing a valid string array, e.g., ['XMAS', 'MASX']".to_string()),
        })
    })?;
    Ok(Grid::from_rows(rows))
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmLocation {
    row: usize,
    col: usize,
    direction: &'static str,
}

#[derive(serde::Serialize)]
struct WasmCrossing {
    row: usize,
    col: usize,
}

/// JS entry: (word: string, rows: string[])
/// returns Array<{row, col, direction}>
#[wasm_bindgen]
pub fn find_locations_wasm(word: &str, rows: JsValue) -> Result<JsValue, JsValue> {
    let grid = grid_from_js(rows)?;
    let locations: Vec<WasmLocation> = find_locations(word, &grid)
        .map_err(WasmError::from)?
        .map(|loc| WasmLocation { row: loc.row, col: loc.col, direction: loc.direction.name() })
        .collect();

    serde_wasm_bindgen::to_value(&locations).map_err(|e| serialization_error(&e, "WASM002"))
}

/// JS entry: (word: string, rows: string[])
/// returns Array<{row, col}>
#[wasm_bindgen]
pub fn find_crossings_wasm(word: &str, rows: JsValue) -> Result<JsValue, JsValue> {
    let grid = grid_from_js(rows)?;
    let crossings: Vec<WasmCrossing> = find_crossings(word, &grid)
        .map_err(WasmError::from)?
        .map(|c| WasmCrossing { row: c.row, col: c.col })
        .collect();

    serde_wasm_bindgen::to_value(&crossings).map_err(|e| serialization_error(&e, "WASM002"))
}

/// Split raw file text into grid rows (BOM and trailing whitespace removed),
/// returned as a `string[]` ready for the search functions above.
#[wasm_bindgen]
pub fn parse_grid(text: &str) -> Result<JsValue, JsValue> {
    let grid = Grid::parse_from_str(text);
    let rows: Vec<String> = (0..grid.num_rows())
        .map(|r| grid.row(r).unwrap_or_default().iter().collect())
        .collect();
    serde_wasm_bindgen::to_value(&rows).map_err(|e| serialization_error(&e, "WASM003"))
}

/// Version string including the git hash captured at build time.
#[wasm_bindgen]
pub fn version() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"))
}
