//! Scenario Tests for the Fuzzy Engine
//!
//! End-to-end checks over whole measurement sets rather than single stages.

use super::*;
use crate::logic::knowledge::{Cause, Finding};

fn outage() -> FuzzyInput {
    FuzzyInput {
        connectivity: 0.0,
        throughput: 0.0,
        packet_loss: 0.0,
        dns_errors: 0.0,
        wifi_signal: 0.0,
        page_load: 0.0,
        server_latency: 0.0,
    }
}

fn rank_of(diag: &FuzzyDiagnosis, cause: Cause) -> usize {
    diag.result
        .position(Finding::Known(cause))
        .unwrap_or(usize::MAX)
}

#[test]
fn test_total_outage_blames_router_or_isp() {
    let diag = diagnose(&outage());

    let best = rank_of(&diag, Cause::RouterFailure).min(rank_of(&diag, Cause::IspProblems));
    assert_eq!(best, 0);
    assert!(best < rank_of(&diag, Cause::Malware));
    assert!(best < rank_of(&diag, Cause::ServerOverload));
}

#[test]
fn test_healthy_network_has_no_evidence() {
    let diag = diagnose(&FuzzyInput::default());

    assert!(diag.fired_rules.is_empty());
    assert_eq!(diag.result.len(), Cause::ALL.len());
    assert!(diag.result.causes.iter().all(|c| c.probability == Some(0)));
    assert_eq!(diag.result.certainty, Some(60));
}

#[test]
fn test_critical_dns_errors_point_at_dns_config() {
    let diag = diagnose(&FuzzyInput {
        dns_errors: 9.0,
        ..Default::default()
    });

    assert_eq!(diag.result.top().unwrap().cause, Finding::Known(Cause::BadDnsConfig));
    assert_eq!(diag.result.len(), 2);
    assert_eq!(diag.result.causes[0].probability, Some(68));
    assert_eq!(diag.result.causes[1].probability, Some(33));
    assert_eq!(diag.result.certainty, Some(66));
}

#[test]
fn test_slow_internal_server_points_at_overload() {
    let diag = diagnose(&FuzzyInput {
        server_latency: 3000.0,
        page_load: 4000.0,
        ..Default::default()
    });

    assert_eq!(diag.result.top().unwrap().cause, Finding::Known(Cause::ServerOverload));
}

#[test]
fn test_weak_wifi_on_flaky_link_points_at_interference() {
    let diag = diagnose(&FuzzyInput {
        connectivity: 50.0,
        wifi_signal: 10.0,
        ..Default::default()
    });

    assert_eq!(diag.result.top().unwrap().cause, Finding::Known(Cause::WifiInterference));
}

#[test]
fn test_all_medium_inputs_are_ambiguous() {
    let diag = diagnose(&FuzzyInput {
        connectivity: 50.0,
        throughput: 45.0,
        packet_loss: 15.0,
        dns_errors: 2.0,
        wifi_signal: 50.0,
        page_load: 2000.0,
        server_latency: 800.0,
    });

    assert!(diag.fired_rules.iter().any(|r| r.id == 26));
    assert_eq!(diag.result.len(), Cause::ALL.len());
    let first = diag.result.causes[0].probability;
    assert!(diag.result.causes.iter().all(|c| c.probability == first));
    assert_eq!(diag.result.certainty, Some(60));
}

#[test]
fn test_percentages_are_normalized_over_a_grid() {
    let connectivity = [0.0, 50.0, 95.0];
    let throughput = [1.0, 15.0, 80.0];
    let packet_loss = [0.0, 15.0, 50.0];
    let dns = [0.0, 2.5, 9.0];
    let wifi = [10.0, 50.0, 90.0];
    let page = [500.0, 2000.0, 4500.0];
    let latency = [50.0, 800.0, 3000.0];

    for &c in &connectivity {
        for &t in &throughput {
            for &p in &packet_loss {
                for &d in &dns {
                    for &w in &wifi {
                        for &pl in &page {
                            for &l in &latency {
                                let input = FuzzyInput {
                                    connectivity: c,
                                    throughput: t,
                                    packet_loss: p,
                                    dns_errors: d,
                                    wifi_signal: w,
                                    page_load: pl,
                                    server_latency: l,
                                };
                                let diag = diagnose(&input);
                                let probs: Vec<u8> = diag
                                    .result
                                    .causes
                                    .iter()
                                    .map(|e| e.probability.unwrap())
                                    .collect();

                                assert!(probs.iter().all(|p| *p <= 100));
                                assert!(probs.windows(2).all(|w| w[0] >= w[1]), "{:?}", input);

                                let certainty = diag.result.certainty.unwrap();
                                assert!((60..=100).contains(&certainty), "{:?}", input);

                                if !diag.fired_rules.is_empty() {
                                    let sum: i32 = probs.iter().map(|p| *p as i32).sum();
                                    let slack = probs.len() as i32;
                                    assert!(
                                        (sum - 100).abs() <= slack,
                                        "sum {} for {:?}",
                                        sum,
                                        input
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_diagnose_is_pure() {
    let input = FuzzyInput {
        packet_loss: 45.0,
        throughput: 12.0,
        ..Default::default()
    };
    assert_eq!(diagnose(&input), diagnose(&input));
}

#[test]
fn test_custom_rule_set() {
    const ONLY_MALWARE: &[FuzzyRule] = &[FuzzyRule {
        id: 1,
        description: "always malware when page loads are slow",
        antecedents: &[(Variable::PageLoad, Term::Slow)],
        consequents: &[(Cause::Malware, Level::High)],
        confidence: 1.0,
    }];

    let input = FuzzyInput {
        page_load: 5000.0,
        ..Default::default()
    };
    let diag = diagnose_with_rules(&input, ONLY_MALWARE);
    assert_eq!(diag.result.len(), 1);
    assert_eq!(diag.result.causes[0].probability, Some(100));
    // single cause: 95 + 5 * 0.9
    assert_eq!(diag.result.certainty, Some(100));
}
