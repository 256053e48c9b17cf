//! Embed parameter building from author-supplied rows.
//!
//! Each row is a sequence of text cells; the first cell names a parameter and
//! the second holds its value. Unknown names, empty values and short rows are
//! dropped without error. When `loop` is `1` the player also needs `playlist`
//! set to the video itself, so that is forced last.

mod set;
mod table;

pub use set::ParamSet;
pub use table::ParamName;

use crate::video_id::VideoId;

/// Trims whitespace and byte-order marks, which pasted cell text often carries.
fn trim_cell(cell: &str) -> &str {
    cell.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Builds the parameter set for `video_id` from `rows`, in row order.
///
/// Names are trimmed and lower-cased, values trimmed. A later row for the same
/// name replaces the value but keeps the first row's position.
pub fn build_params<R, S>(rows: &[R], video_id: &VideoId) -> ParamSet
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut params = ParamSet::default();

    for row in rows {
        let cells: &[S] = row.as_ref();
        let [name, value, ..] = cells else {
            tracing::debug!("skipping parameter row with fewer than two cells");
            continue;
        };
        let name = trim_cell(AsRef::<str>::as_ref(name)).to_lowercase();
        let value = trim_cell(AsRef::<str>::as_ref(value));

        match ParamName::lookup(&name) {
            Some(param) if !value.is_empty() => params.set(param, value.to_string()),
            Some(_) => tracing::debug!(name = %name, "skipping parameter with empty value"),
            None => tracing::debug!(name = %name, "skipping unknown parameter"),
        }
    }

    if params.get(ParamName::Loop) == Some("1") {
        params.set(ParamName::Playlist, video_id.as_str().to_string());
    }

    params
}
