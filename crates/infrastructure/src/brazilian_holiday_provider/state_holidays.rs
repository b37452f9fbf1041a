use jrclaw_domain::StateCode;

/// Fixed state holidays as `(month, day)` pairs, excluding national ones.
pub(super) fn state_holidays(state: StateCode) -> &'static [(u32, u32)] {
    match state {
        StateCode::Ac => &[(1, 23), (6, 15), (9, 5), (11, 17)],
        StateCode::Al => &[(6, 24), (6, 29), (9, 16)],
        StateCode::Am => &[(9, 5), (12, 8)],
        StateCode::Ap => &[(3, 19), (10, 5)],
        StateCode::Ba => &[(7, 2)],
        StateCode::Ce => &[(3, 19), (3, 25)],
        StateCode::Df => &[(4, 21), (11, 30)],
        StateCode::Es => &[(10, 28)],
        StateCode::Go => &[(10, 28)],
        StateCode::Ma => &[(7, 28)],
        // Data Magna (Apr 21) coincides with Tiradentes.
        StateCode::Mg => &[],
        StateCode::Ms => &[(10, 11)],
        StateCode::Mt => &[(11, 20)],
        StateCode::Pa => &[(8, 15)],
        StateCode::Pb => &[(8, 5)],
        StateCode::Pe => &[(3, 6), (6, 24)],
        StateCode::Pi => &[(10, 19)],
        StateCode::Pr => &[(12, 19)],
        StateCode::Rj => &[(4, 23), (10, 28)],
        StateCode::Rn => &[(8, 7), (10, 3)],
        StateCode::Ro => &[(1, 4), (6, 18)],
        StateCode::Rr => &[(10, 5)],
        StateCode::Rs => &[(9, 20)],
        StateCode::Sc => &[(8, 11)],
        StateCode::Se => &[(7, 8)],
        StateCode::Sp => &[(7, 9)],
        StateCode::To => &[(9, 8), (10, 5)],
    }
}
