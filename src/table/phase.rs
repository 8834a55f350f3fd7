//! Round lifecycle phases.

/// Where the engine is in the round lifecycle.
///
/// `Idle` covers both waiting-for-players and the gap between rounds; the
/// other phases are traversed in order by
/// [`Table::play_round`](super::Table::play_round), with `InsuranceOffer`
/// entered only when the dealer's up-card is an Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round in progress; players may join or leave.
    Idle,
    /// Collecting wagers in join order.
    Betting,
    /// Dealing the interleaved initial cards.
    InitialDeal,
    /// Offering insurance against a dealer Ace.
    InsuranceOffer,
    /// Players act hand by hand.
    PlayerTurns,
    /// The dealer plays out their hand.
    DealerTurn,
    /// Computing and distributing payouts.
    Settlement,
}
