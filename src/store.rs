use std::path::PathBuf;

const WINDOW_WIDTH_KEY: &[u8] = b"window_width";
const WINDOW_HEIGHT_KEY: &[u8] = b"window_height";

fn state_db_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".documind").join("state"))
}

/// Opens the tree that remembers the last window size. Returns `None` when
/// the database cannot be opened (another instance holds the lock, read-only
/// home directory); persistence is optional either way.
pub fn open_window_size_tree() -> Option<sled::Tree> {
    let path = state_db_path()?;
    let db = sled::open(path).ok()?;
    db.open_tree("window_size").ok()
}

pub fn load_window_size(tree: &sled::Tree) -> Option<(f32, f32)> {
    let width = read_f32(tree, WINDOW_WIDTH_KEY)?;
    let height = read_f32(tree, WINDOW_HEIGHT_KEY)?;
    if width < 200.0 || height < 200.0 {
        return None;
    }
    Some((width, height))
}

pub fn save_window_size(tree: &sled::Tree, width: f32, height: f32) {
    let _ = tree.insert(WINDOW_WIDTH_KEY, width.to_be_bytes().to_vec());
    let _ = tree.insert(WINDOW_HEIGHT_KEY, height.to_be_bytes().to_vec());
}

fn read_f32(tree: &sled::Tree, key: &[u8]) -> Option<f32> {
    let raw = tree.get(key).ok().flatten()?;
    let bytes: [u8; 4] = raw.as_ref().try_into().ok()?;
    Some(f32::from_be_bytes(bytes))
}
