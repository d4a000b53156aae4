use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use subaudit_core::{annual_equivalent, monthly_equivalent, BillingCycle};

#[test]
fn monthly_equivalents_follow_conversion_table() {
    assert_eq!(
        monthly_equivalent(dec!(5), BillingCycle::Weekly),
        dec!(260) / dec!(12)
    );
    assert_eq!(monthly_equivalent(dec!(15.99), BillingCycle::Monthly), dec!(15.99));
    assert_eq!(monthly_equivalent(dec!(30), BillingCycle::Quarterly), dec!(10));
    assert_eq!(monthly_equivalent(dec!(120), BillingCycle::Annual), dec!(10));
}

#[test]
fn annual_equivalents_follow_conversion_table() {
    assert_eq!(annual_equivalent(dec!(5), BillingCycle::Weekly), dec!(260));
    assert_eq!(annual_equivalent(dec!(10), BillingCycle::Monthly), dec!(120));
    assert_eq!(annual_equivalent(dec!(30), BillingCycle::Quarterly), dec!(120));
    assert_eq!(annual_equivalent(dec!(100), BillingCycle::Annual), dec!(100));
}

#[test]
fn annual_is_twelve_months_for_every_cycle() {
    let tolerance = dec!(0.000000000001);
    let costs = [dec!(0), dec!(0.01), dec!(4.99), dec!(9.99), dec!(17), dec!(1234.56)];

    for cycle in BillingCycle::ALL {
        for cost in costs {
            let annual = annual_equivalent(cost, cycle);
            let from_monthly = monthly_equivalent(cost, cycle) * Decimal::from(12);
            assert!(
                (annual - from_monthly).abs() <= tolerance,
                "cycle={cycle:?} cost={cost} annual={annual} monthly*12={from_monthly}"
            );
            if cycle != BillingCycle::Weekly {
                assert_eq!(annual, from_monthly, "cycle={cycle:?} cost={cost}");
            }
        }
    }
}

#[test]
fn billing_cycles_are_ordered_by_period_length() {
    assert!(BillingCycle::Weekly < BillingCycle::Monthly);
    assert!(BillingCycle::Monthly < BillingCycle::Quarterly);
    assert!(BillingCycle::Quarterly < BillingCycle::Annual);

    let mut shuffled = vec![
        BillingCycle::Annual,
        BillingCycle::Weekly,
        BillingCycle::Quarterly,
        BillingCycle::Monthly,
    ];
    shuffled.sort();
    assert_eq!(shuffled, BillingCycle::ALL.to_vec());
}

#[test]
fn billing_cycle_defaults_to_weekly() {
    assert_eq!(BillingCycle::default(), BillingCycle::Weekly);
}
