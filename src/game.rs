use std::fmt::Debug;

/// A two-player board game that can be searched by speculatively placing a
/// mark and rolling it back.
pub(crate) trait Game: std::fmt::Display {
    type Action: Debug + PartialEq + Eq + Clone + Copy;
    type Player: PartialEq + Debug + Clone + Copy;

    fn place(&mut self, action: Self::Action, player: Self::Player) -> anyhow::Result<()>;

    fn clear(&mut self, action: Self::Action);

    /// Empty positions, in a fixed order.
    fn get_available_moves(&self) -> Vec<Self::Action>;

    fn is_winner(&self, player: Self::Player) -> bool;

    fn is_full(&self) -> bool;
}
