use super::card::Card;
use super::color::Color;
use super::value::Value;
use std::collections::HashSet;
use std::collections::VecDeque;

/// An ordered sequence of cards consumed from the front.
///
/// Owned by exactly one game for its whole lifetime. [`Deck::new`] is the
/// shuffle provider: a uniformly random permutation of the standard 50-card
/// multiset. Tests build fixed decks through `From<Vec<Card>>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(VecDeque<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a uniformly shuffled standard deck.
    pub fn new() -> Self {
        Self::shuffled(&mut rand::rng())
    }
    /// Creates a standard deck shuffled with the given source of randomness.
    pub fn shuffled<R>(rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        use rand::seq::SliceRandom;
        let mut deck = Self::standard();
        deck.0.make_contiguous().shuffle(rng);
        deck
    }
    /// The unshuffled standard deck, grouped by colour then value.
    pub fn standard() -> Self {
        Color::all()
            .into_iter()
            .flat_map(|c| {
                Value::all()
                    .into_iter()
                    .flat_map(move |v| std::iter::repeat_n(Card::from((c, v)), v.copies()))
            })
            .collect::<Vec<Card>>()
            .into()
    }
    /// Removes and returns the front card, if any remain.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop_front()
    }
    /// Removes up to `n` cards from the front, in order.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.0.len());
        self.0.drain(..n).collect()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Number of distinct colours among the remaining cards.
    pub fn colors(&self) -> usize {
        self.0.iter().map(Card::color).collect::<HashSet<_>>().len()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0.into()
    }
}
