use super::*;

impl GameState {
    /// Redacted copy of the state as `viewer` may see it.
    ///
    /// The viewer's own hand is cleared; every other field, including every
    /// other player's hand, is copied unchanged. The flag reports whether the
    /// viewer holds a seat at all. An unseated viewer gets an unmodified copy.
    pub fn project(&self, viewer: &PlayerID) -> (GameState, bool) {
        let mut view = self.clone();
        let mut found = false;
        view.players
            .iter_mut()
            .filter(|p| p.id() == viewer)
            .for_each(|p| {
                p.hand_mut().clear();
                found = true;
            });
        (view, found)
    }
}
