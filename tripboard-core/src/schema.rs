//! # Persisted layout schema
//!
//! The layout slot holds a JSON document. Documents written by this crate
//! carry `"version": 1` and are decoded strictly. Anything else (documents
//! written before versioning existed, or a versioned document with a broken
//! field) goes through [`migrate_legacy`], which repairs each field
//! independently instead of rejecting the whole document.
//!
//! Current document shape:
//!
//! ```json
//! {
//!   "version": 1,
//!   "panels": [{ "id": 1, "url": "", "panelType": "travel" }],
//!   "visiblePanels": [1],
//!   "cols": [0.5, 0.5],
//!   "rows": [0.5, 0.5],
//!   "activePanelId": 1
//! }
//! ```

use crate::model::{Layout, Panel, PanelId, SplitRatio, DEFAULT_ACTIVE_PANEL_ID};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use tripboard_panel_api::ContentKind;

/// Version written by [`encode`].
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutDocumentV1 {
    version: u32,
    panels: Vec<Panel>,
    visible_panels: Vec<PanelId>,
    cols: SplitRatio,
    rows: SplitRatio,
    active_panel_id: Option<PanelId>,
}

impl From<&Layout> for LayoutDocumentV1 {
    fn from(layout: &Layout) -> Self {
        Self {
            version: SCHEMA_VERSION,
            panels: layout.panels.clone(),
            visible_panels: layout.visible_panels.clone(),
            cols: layout.cols,
            rows: layout.rows,
            active_panel_id: layout.active_panel_id,
        }
    }
}

impl From<LayoutDocumentV1> for Layout {
    fn from(doc: LayoutDocumentV1) -> Self {
        Self {
            panels: doc.panels,
            visible_panels: doc.visible_panels,
            active_panel_id: doc.active_panel_id,
            cols: doc.cols,
            rows: doc.rows,
        }
    }
}

/// Serialize a layout as a current-version document.
///
/// # Example
///
/// ```rust
/// use tripboard_core::{schema, Layout};
///
/// let json = schema::encode(&Layout::default())?;
/// assert!(json.contains("\"version\": 1"));
/// # Ok::<(), tripboard_core::Error>(())
/// ```
pub fn encode(layout: &Layout) -> Result<String> {
    serde_json::to_string_pretty(&LayoutDocumentV1::from(layout))
        .map_err(|e| Error::layout(format!("Failed to serialize layout: {}", e)))
}

/// Decode a stored document into a layout.
///
/// An empty slot decodes to the default layout.
///
/// # Errors
///
/// Returns an error when the text is not JSON, when the top-level value is
/// not an object, or when `panels` is present but is not an array or holds a
/// `null` entry. Callers
/// that must never fail fall back to [`Layout::default`].
///
/// # Example
///
/// ```rust
/// use tripboard_core::schema;
///
/// let layout = schema::decode(r#"{ "visibleIds": [2], "activeId": 2 }"#)?;
/// assert_eq!(layout.visible_panels, vec![2]);
/// assert_eq!(layout.active_panel_id, Some(2));
/// # Ok::<(), tripboard_core::Error>(())
/// ```
pub fn decode(raw: &str) -> Result<Layout> {
    if raw.trim().is_empty() {
        return Ok(Layout::default());
    }

    let value: Value = serde_json::from_str(raw)?;
    let object = value
        .as_object()
        .ok_or_else(|| Error::layout("Layout document is not a JSON object"))?;

    if object.get("version").and_then(Value::as_u64) == Some(u64::from(SCHEMA_VERSION))
        && has_every_v1_field(object)
    {
        match serde_json::from_value::<LayoutDocumentV1>(value.clone()) {
            Ok(doc) => return Ok(doc.into()),
            Err(e) => debug!("Version {} document failed strict decoding, repairing: {}", SCHEMA_VERSION, e),
        }
    }

    migrate_legacy(object)
}

// Optional fields must be spelled out, `null` included, for the strict path;
// serde would otherwise read a missing one as `None` and skip its repair.
fn has_every_v1_field(object: &Map<String, Value>) -> bool {
    let panels_complete = match object.get("panels") {
        Some(Value::Array(entries)) => entries
            .iter()
            .all(|entry| entry.as_object().is_some_and(|panel| panel.contains_key("panelType"))),
        _ => false,
    };
    panels_complete && object.contains_key("activePanelId")
}

/// Repair an unversioned (or damaged) document field by field.
///
/// Each field falls back to its own default when absent or wrong-shaped;
/// `visibleIds` and `activeId` are accepted as older names of
/// `visiblePanels` and `activePanelId`.
pub fn migrate_legacy(object: &Map<String, Value>) -> Result<Layout> {
    let defaults = Layout::default();

    let panels = match object.get("panels") {
        None | Some(Value::Null) => defaults.panels,
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| repair_panel(index, entry))
            .collect::<Result<Vec<_>>>()?,
        Some(_) => return Err(Error::layout("Layout 'panels' is not an array")),
    };

    let visible_panels = id_list(object.get("visiblePanels"))
        .or_else(|| id_list(object.get("visibleIds")))
        .unwrap_or(defaults.visible_panels);

    let cols = split_ratio(object.get("cols")).unwrap_or(defaults.cols);
    let rows = split_ratio(object.get("rows")).unwrap_or(defaults.rows);

    let active_panel_id = panel_id(object.get("activePanelId"))
        .or_else(|| panel_id(object.get("activeId")))
        .unwrap_or(DEFAULT_ACTIVE_PANEL_ID);

    debug!("Migrated unversioned layout document with {} panels", panels.len());

    Ok(Layout {
        panels,
        visible_panels,
        active_panel_id: Some(active_panel_id),
        cols,
        rows,
    })
}

fn repair_panel(index: usize, entry: &Value) -> Result<Panel> {
    if entry.is_null() {
        return Err(Error::layout(format!("Layout panel entry {} is null", index)));
    }

    let fallback_id = PanelId::try_from(index + 1).unwrap_or(PanelId::MAX);
    let id = entry
        .get("id")
        .and_then(Value::as_u64)
        .and_then(|id| PanelId::try_from(id).ok())
        .unwrap_or(fallback_id);

    let url = entry
        .get("url")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let content = match entry.get("panelType") {
        None | Some(Value::Null) if index == 0 => Some(ContentKind::Travel),
        Some(Value::String(name)) => ContentKind::parse(name),
        _ => None,
    };

    Ok(Panel { id, url, content })
}

fn id_list(value: Option<&Value>) -> Option<Vec<PanelId>> {
    value.and_then(|value| serde_json::from_value(value.clone()).ok())
}

fn split_ratio(value: Option<&Value>) -> Option<SplitRatio> {
    let pair: Vec<f64> = value.and_then(|value| serde_json::from_value(value.clone()).ok())?;
    match pair.as_slice() {
        [leading, trailing] => Some(SplitRatio([*leading, *trailing])),
        _ => None,
    }
}

// Zero is not a valid id and counts as absent.
fn panel_id(value: Option<&Value>) -> Option<PanelId> {
    value
        .and_then(Value::as_u64)
        .filter(|id| *id != 0)
        .and_then(|id| PanelId::try_from(id).ok())
}
