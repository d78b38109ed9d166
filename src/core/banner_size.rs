use crate::domain::model::{AdSize, LiftoffAdSize};

/// Resolves the Liftoff banner size equivalent to a host-requested size.
///
/// Standard sizes map to their named Liftoff counterparts; anything else
/// passes through unchanged as a custom size, so the function is total.
/// The placement id does not affect the decision and is only carried into
/// the debug log.
pub fn liftoff_banner_size_for(requested: AdSize, placement_id: &str) -> LiftoffAdSize {
    let resolved = match (requested.width(), requested.height()) {
        (300, 50) => LiftoffAdSize::BannerShort,
        (320, 50) => LiftoffAdSize::Banner,
        (728, 90) => LiftoffAdSize::Leaderboard,
        (300, 250) => LiftoffAdSize::Mrec,
        (width, height) => LiftoffAdSize::Custom { width, height },
    };

    tracing::debug!(
        requested = %requested,
        placement_id,
        resolved = %resolved,
        "resolved Liftoff banner size"
    );

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every named size maps back to itself and no two named sizes share
    // dimensions.
    #[test]
    fn standard_table_is_injective() {
        let named = [
            LiftoffAdSize::BannerShort,
            LiftoffAdSize::Banner,
            LiftoffAdSize::Leaderboard,
            LiftoffAdSize::Mrec,
        ];

        for size in named {
            let requested = AdSize::new(size.width(), size.height());
            assert_eq!(liftoff_banner_size_for(requested, "placement"), size);
        }

        for (i, a) in named.iter().enumerate() {
            for b in &named[i + 1..] {
                assert_ne!((a.width(), a.height()), (b.width(), b.height()));
            }
        }
    }
}
