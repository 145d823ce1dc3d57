/// Lowest server boost tier that unlocks role icons.
pub const ROLE_ICON_MIN_BOOST_TIER: u8 = 2;

/// Whether a server at `premium_tier` should get the "not boosted enough" advisory.
///
/// The advisory never blocks an attempt; the remote API has the final say.
pub fn lacks_role_icon_tier(premium_tier: u8) -> bool {
    premium_tier < ROLE_ICON_MIN_BOOST_TIER
}
