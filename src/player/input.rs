/// One tick's worth of player intent.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Hotbar slot to switch to
    pub select_slot: Option<usize>,
    /// Tile to mine, `(column, row)`
    pub mine: Option<(i32, i32)>,
    /// Tile to place the selected item into
    pub place: Option<(i32, i32)>,
}
