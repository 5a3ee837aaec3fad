use super::*;
use hnb_core::*;
use hnb_gameplay::*;

/// Connections attached to a room, at most one per player.
///
/// Kept in attach order so every broadcast goes out in the same sequence.
/// Links whose connection has gone away are dropped as soon as a send fails.
#[derive(Debug, Default)]
pub struct Table {
    links: Vec<(PlayerID, Link)>,
}

impl Table {
    /// Attaches a player's link. A link already held for that player is
    /// told to close and handed back.
    pub fn attach(&mut self, player: PlayerID, link: Link) -> Option<Link> {
        match self.links.iter_mut().find(|(id, _)| *id == player) {
            Some((_, held)) => {
                let stale = std::mem::replace(held, link);
                let _ = stale.send(Event::Close);
                log::debug!("[table] replaced link for {}", player);
                Some(stale)
            }
            None => {
                self.links.push((player, link));
                None
            }
        }
    }
    pub fn contains(&self, player: &PlayerID) -> bool {
        self.links.iter().any(|(id, _)| id == player)
    }
    pub fn len(&self) -> usize {
        self.links.len()
    }
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.links.len() >= MAX_PLAYERS
    }
    /// Drops links whose receiving end is gone.
    pub fn prune(&mut self) {
        self.links.retain(|(player, link)| match link.is_closed() {
            true => {
                log::debug!("[table] {} went away", player);
                false
            }
            false => true,
        });
    }
    /// Sends an event to one player.
    pub fn unicast(&mut self, player: &PlayerID, event: Event) {
        log::trace!("[table] unicast to {}: {}", player, event);
        match self.links.iter().find(|(id, _)| id == player) {
            Some((_, link)) => match link.send(event) {
                Ok(()) => {}
                Err(_) => {
                    log::debug!("[table] unicast to {} failed", player);
                    self.prune();
                }
            },
            None => log::debug!("[table] unicast to {}: not attached", player),
        }
    }
    /// Sends each attached player the event built for them.
    pub fn broadcast<F>(&mut self, event: F)
    where
        F: Fn(&PlayerID) -> Event,
    {
        let before = self.links.len();
        self.links
            .retain(|(player, link)| link.send(event(player)).is_ok());
        if self.links.len() < before {
            log::debug!("[table] dropped {} dead links", before - self.links.len());
        }
    }
    /// Tells every connection to close and forgets them.
    pub fn close_all(&mut self) {
        for (_, link) in self.links.drain(..) {
            let _ = link.send(Event::Close);
        }
    }
}
