//! Built-in content pack: 3 components x 5 levels plus per-level ROI figures.
//!
//! Loaded once per process and never mutated. Cost figures are percent of
//! the annual IT budget; narrative text is intentionally short enough to fit
//! a dashboard card.

use super::{
    BusinessImpactDetail, BusinessImpactDetails, ComponentDetails, ComponentEntry, Dataset,
    RoiEntry, RoiEstimate,
};
use crate::core::{CiaComponent, RiskLevel, SecurityLevel};
use once_cell::sync::Lazy;

static DATASET: Lazy<Dataset> = Lazy::new(build);

/// Process-wide default dataset. Validated by tests, not at access time.
pub fn default_dataset() -> &'static Dataset {
    &DATASET
}

fn color_for(level: SecurityLevel) -> (&'static str, &'static str) {
    match level {
        SecurityLevel::None => ("#e74c3c", "#ffffff"),
        SecurityLevel::Low => ("#e67e22", "#ffffff"),
        SecurityLevel::Moderate => ("#f1c40f", "#000000"),
        SecurityLevel::High => ("#2ecc71", "#000000"),
        SecurityLevel::VeryHigh => ("#3498db", "#ffffff"),
    }
}

#[allow(clippy::too_many_arguments)]
fn base(
    level: SecurityLevel,
    description: &str,
    technical: &str,
    business_impact: &str,
    capex: f64,
    opex: f64,
    recommendations: &[&str],
) -> ComponentDetails {
    let (bg_color, text_color) = color_for(level);
    ComponentDetails {
        description: description.to_string(),
        technical: technical.to_string(),
        business_impact: business_impact.to_string(),
        capex,
        opex,
        bg_color: bg_color.to_string(),
        text_color: text_color.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        uptime: None,
        rto: None,
        rpo: None,
        mttr: None,
        validation_method: None,
        protection_method: None,
        classification: None,
        business_impact_details: None,
    }
}

fn detail(description: &str, risk_level: RiskLevel) -> Option<BusinessImpactDetail> {
    Some(BusinessImpactDetail {
        description: description.to_string(),
        risk_level,
    })
}

fn entry(
    component: CiaComponent,
    level: SecurityLevel,
    details: ComponentDetails,
) -> ComponentEntry {
    ComponentEntry {
        component,
        level,
        details,
    }
}

fn availability_entries() -> Vec<ComponentEntry> {
    use CiaComponent::Availability;
    use SecurityLevel::*;

    vec![
        entry(
            Availability,
            None,
            ComponentDetails {
                uptime: Some("<90%".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Any outage becomes a business outage; recovery is ad hoc and unbounded.".to_string(),
                    financial: detail(
                        "Revenue stops for the full duration of every incident; losses are unbounded.",
                        RiskLevel::Critical,
                    ),
                    operational: detail(
                        "Work halts during outages and recovery time is unpredictable.",
                        RiskLevel::Critical,
                    ),
                    reputational: detail(
                        "Repeated visible outages erode customer confidence quickly.",
                        RiskLevel::High,
                    ),
                    regulatory: Option::None,
                    strategic: Option::None,
                }),
                ..base(
                    None,
                    "No availability measures: no redundancy, no backups, no recovery plan.",
                    "Single instance deployments with no failover, no monitoring and no tested restore path.",
                    "Unplanned downtime directly interrupts revenue and operations, with no committed recovery time.",
                    0.0,
                    0.0,
                    &[
                        "Establish basic system monitoring so outages are at least detected",
                        "Schedule initial backups of business-critical data",
                        "Document a minimal manual recovery procedure",
                    ],
                )
            },
        ),
        entry(
            Availability,
            Low,
            ComponentDetails {
                uptime: Some("95%".to_string()),
                rto: Some("24-48 hours".to_string()),
                rpo: Some("24 hours".to_string()),
                mttr: Some("12-24 hours".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Outages of a working day or more remain plausible, but recovery is at least bounded.".to_string(),
                    financial: detail(
                        "Multi-hour outages still translate into measurable revenue loss.",
                        RiskLevel::High,
                    ),
                    operational: detail(
                        "Staff fall back to manual processes during recovery windows.",
                        RiskLevel::High,
                    ),
                    reputational: detail(
                        "Occasional visible downtime is noticed but survivable.",
                        RiskLevel::Medium,
                    ),
                    regulatory: Option::None,
                    strategic: Option::None,
                }),
                ..base(
                    Low,
                    "Basic availability: daily backups and a documented manual recovery procedure.",
                    "Nightly backups, single-region deployment, manual restore runbooks, basic uptime monitoring.",
                    "Up to two days of downtime per incident is tolerated; data loss up to one day is possible.",
                    5.0,
                    5.0,
                    &[
                        "Verify backups with periodic test restores",
                        "Add alerting on availability monitors",
                        "Agree internal RTO/RPO targets with business owners",
                    ],
                )
            },
        ),
        entry(
            Availability,
            Moderate,
            ComponentDetails {
                uptime: Some("99%".to_string()),
                rto: Some("4-8 hours".to_string()),
                rpo: Some("4 hours".to_string()),
                mttr: Some("2-4 hours".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Standard business continuity: outages are rare and recovery fits inside a working day.".to_string(),
                    financial: detail(
                        "Downtime cost is bounded to a few hours of lost transactions per incident.",
                        RiskLevel::Medium,
                    ),
                    operational: detail(
                        "Failover is partially automated; most incidents are absorbed without customer-visible impact.",
                        RiskLevel::Medium,
                    ),
                    reputational: detail(
                        "Service interruptions are infrequent enough not to shape customer perception.",
                        RiskLevel::Low,
                    ),
                    regulatory: Option::None,
                    strategic: Option::None,
                }),
                ..base(
                    Moderate,
                    "Standard availability: warm standby, scheduled backups every few hours, pilot light recovery.",
                    "Warm standby in a second zone, four-hour backup cadence, partially automated failover with on-call rotation.",
                    "Roughly 99% uptime keeps annual downtime under four days and bounds data loss to about four hours.",
                    15.0,
                    15.0,
                    &[
                        "Automate failover for the most critical services",
                        "Run scheduled disaster-recovery exercises",
                        "Track uptime against the 99% target monthly",
                    ],
                )
            },
        ),
        entry(
            Availability,
            High,
            ComponentDetails {
                uptime: Some("99.9%".to_string()),
                rto: Some("15-60 minutes".to_string()),
                rpo: Some("15 minutes".to_string()),
                mttr: Some("<60 minutes".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "High availability suitable for customer-facing revenue systems.".to_string(),
                    financial: detail(
                        "Downtime cost is limited to minutes per incident; annual loss is small and predictable.",
                        RiskLevel::Low,
                    ),
                    operational: detail(
                        "Automatic failover keeps operations running through most infrastructure faults.",
                        RiskLevel::Low,
                    ),
                    reputational: detail(
                        "Published uptime targets can be credibly offered in customer SLAs.",
                        RiskLevel::Low,
                    ),
                    regulatory: Option::None,
                    strategic: detail(
                        "Reliability becomes a sellable property of the platform.",
                        RiskLevel::Low,
                    ),
                }),
                ..base(
                    High,
                    "High availability: multi-zone redundancy, automatic failover, near-real-time replication.",
                    "Active-passive clusters across zones, 15-minute replication, automated health-check driven failover.",
                    "Three nines keeps annual downtime under nine hours and supports customer-facing SLA commitments.",
                    25.0,
                    40.0,
                    &[
                        "Introduce chaos/failover testing in pre-production",
                        "Replicate data to a second region for regional failure cover",
                        "Define and publish service-level objectives per service",
                    ],
                )
            },
        ),
        entry(
            Availability,
            VeryHigh,
            ComponentDetails {
                uptime: Some("99.99%".to_string()),
                rto: Some("<5 minutes".to_string()),
                rpo: Some("<1 minute".to_string()),
                mttr: Some("<15 minutes".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Continuous operation engineered for mission-critical, always-on services.".to_string(),
                    financial: detail(
                        "Downtime losses are negligible; the cost risk shifts to the standing infrastructure spend.",
                        RiskLevel::Minimal,
                    ),
                    operational: detail(
                        "Multi-region active-active absorbs even regional failures without interruption.",
                        RiskLevel::Minimal,
                    ),
                    reputational: detail(
                        "Always-on reliability differentiates the service in the market.",
                        RiskLevel::Minimal,
                    ),
                    regulatory: Option::None,
                    strategic: detail(
                        "Enables expansion into markets with strict continuity requirements.",
                        RiskLevel::Minimal,
                    ),
                }),
                ..base(
                    VeryHigh,
                    "Maximum availability: multi-region active-active with continuous data replication.",
                    "Active-active across regions, synchronous or near-synchronous replication, automated traffic steering, 24/7 operations.",
                    "Four nines limits annual downtime to under an hour; suited to systems where interruption is intolerable.",
                    60.0,
                    70.0,
                    &[
                        "Run game-day exercises covering full regional loss",
                        "Continuously verify replication lag against the sub-minute RPO",
                        "Review the standing cost of idle capacity annually",
                    ],
                )
            },
        ),
    ]
}

fn integrity_entries() -> Vec<ComponentEntry> {
    use CiaComponent::Integrity;
    use SecurityLevel::*;

    vec![
        entry(
            Integrity,
            None,
            ComponentDetails {
                validation_method: Some("None".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Data can be wrong or tampered with and nobody would know.".to_string(),
                    financial: detail(
                        "Decisions and billing may silently run on corrupted figures.",
                        RiskLevel::Critical,
                    ),
                    operational: detail(
                        "Errors propagate unchecked across systems and reports.",
                        RiskLevel::Critical,
                    ),
                    reputational: Option::None,
                    regulatory: detail(
                        "No audit trail exists to demonstrate the correctness of records.",
                        RiskLevel::High,
                    ),
                    strategic: Option::None,
                }),
                ..base(
                    None,
                    "No integrity controls: no validation, no audit logs, no change tracking.",
                    "No input validation, no checksums, shared write access without review or logging.",
                    "Corrupted or manipulated data can drive business decisions without detection.",
                    0.0,
                    0.0,
                    &[
                        "Introduce input validation at system boundaries",
                        "Enable audit logging on business-critical records",
                        "Restrict write access to production data",
                    ],
                )
            },
        ),
        entry(
            Integrity,
            Low,
            ComponentDetails {
                validation_method: Some("Manual checks".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Gross errors are usually caught, subtle or malicious changes are not.".to_string(),
                    financial: detail(
                        "Undetected data errors can still reach invoices and reports.",
                        RiskLevel::High,
                    ),
                    operational: detail(
                        "Manual review catches obvious mistakes but does not scale.",
                        RiskLevel::Medium,
                    ),
                    reputational: Option::None,
                    regulatory: detail(
                        "Basic logs exist but would not withstand a serious audit.",
                        RiskLevel::Medium,
                    ),
                    strategic: Option::None,
                }),
                ..base(
                    Low,
                    "Basic integrity: manual spot checks and simple application-level validation.",
                    "Form-level validation, periodic manual reconciliation, coarse-grained change logs.",
                    "Obvious data errors are caught in review; silent corruption and insider tampering remain possible.",
                    5.0,
                    10.0,
                    &[
                        "Automate validation rules that are currently manual",
                        "Add database constraints for critical fields",
                        "Keep immutable logs of changes to key records",
                    ],
                )
            },
        ),
        entry(
            Integrity,
            Moderate,
            ComponentDetails {
                validation_method: Some("Automated validation".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Automated checks make routine corruption unlikely; targeted tampering is still feasible.".to_string(),
                    financial: detail(
                        "Transactional integrity protects billing and financial reporting from routine error.",
                        RiskLevel::Medium,
                    ),
                    operational: detail(
                        "Bad inputs are rejected at the boundary instead of cleaned up downstream.",
                        RiskLevel::Low,
                    ),
                    reputational: Option::None,
                    regulatory: detail(
                        "Audit logs cover critical records and satisfy common control frameworks.",
                        RiskLevel::Low,
                    ),
                    strategic: Option::None,
                }),
                ..base(
                    Moderate,
                    "Standard integrity: automated validation, database constraints, audit logging.",
                    "Schema and constraint enforcement, server-side validation, append-only audit logs, checksums on transfers.",
                    "Routine corruption is prevented or detected quickly; records are defensible in ordinary audits.",
                    20.0,
                    20.0,
                    &[
                        "Add cryptographic checksums to data exchanges",
                        "Alert on anomalous change patterns in audit logs",
                        "Review validation coverage as schemas evolve",
                    ],
                )
            },
        ),
        entry(
            Integrity,
            High,
            ComponentDetails {
                validation_method: Some("Cryptographic verification".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Tampering is detectable end to end; data lineage is provable.".to_string(),
                    financial: detail(
                        "Financial records carry verifiable evidence of correctness.",
                        RiskLevel::Low,
                    ),
                    operational: detail(
                        "Signed pipelines catch unauthorized modification before it spreads.",
                        RiskLevel::Low,
                    ),
                    reputational: detail(
                        "Provable integrity supports trust-sensitive partnerships.",
                        RiskLevel::Low,
                    ),
                    regulatory: detail(
                        "Cryptographic audit trails satisfy strict evidentiary requirements.",
                        RiskLevel::Low,
                    ),
                    strategic: Option::None,
                }),
                ..base(
                    High,
                    "High integrity: cryptographic hashing and signing with tamper-evident audit trails.",
                    "Digital signatures on records and transfers, hash-chained audit logs, segregation of duties for changes.",
                    "Unauthorized modification is detectable and attributable, meeting the bar for regulated data.",
                    35.0,
                    50.0,
                    &[
                        "Extend signing to all inter-system data flows",
                        "Introduce dual control for high-impact changes",
                        "Periodically verify hash chains end to end",
                    ],
                )
            },
        ),
        entry(
            Integrity,
            VeryHigh,
            ComponentDetails {
                validation_method: Some("Distributed ledger verification".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Integrity is independently verifiable by outside parties, not just asserted.".to_string(),
                    financial: detail(
                        "Settlement-grade records remove disputes over data authenticity.",
                        RiskLevel::Minimal,
                    ),
                    operational: detail(
                        "Multi-party verification removes single points of trust.",
                        RiskLevel::Minimal,
                    ),
                    reputational: detail(
                        "Externally auditable integrity is a differentiator in trust-critical markets.",
                        RiskLevel::Minimal,
                    ),
                    regulatory: detail(
                        "Evidence quality exceeds most regulatory requirements.",
                        RiskLevel::Minimal,
                    ),
                    strategic: Option::None,
                }),
                ..base(
                    VeryHigh,
                    "Maximum integrity: distributed-ledger style verification with independent attestation.",
                    "Append-only replicated ledgers, multi-party consensus on critical records, externally anchored proofs.",
                    "Data authenticity can be demonstrated to third parties; suited to settlement and evidentiary systems.",
                    60.0,
                    70.0,
                    &[
                        "Anchor ledger digests with an independent external service",
                        "Automate third-party attestation reporting",
                        "Budget for the operational overhead of consensus infrastructure",
                    ],
                )
            },
        ),
    ]
}

fn confidentiality_entries() -> Vec<ComponentEntry> {
    use CiaComponent::Confidentiality;
    use SecurityLevel::*;

    vec![
        entry(
            Confidentiality,
            None,
            ComponentDetails {
                protection_method: Some("None".to_string()),
                classification: Some("Public".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Everything stored is effectively public; only genuinely public data belongs here.".to_string(),
                    financial: Option::None,
                    operational: Option::None,
                    reputational: detail(
                        "Any sensitive data that lands here is one incident away from disclosure.",
                        RiskLevel::Critical,
                    ),
                    regulatory: detail(
                        "Storing personal data without controls breaches essentially every privacy regime.",
                        RiskLevel::Critical,
                    ),
                    strategic: Option::None,
                }),
                ..base(
                    None,
                    "No confidentiality controls: data is unprotected and effectively public.",
                    "No access control, no encryption in transit or at rest, no data classification.",
                    "Suitable only for data intended to be public; anything sensitive is exposed to anyone who looks.",
                    0.0,
                    0.0,
                    &[
                        "Classify data so sensitive content is identified",
                        "Put authentication in front of non-public systems",
                        "Enable TLS on all external endpoints",
                    ],
                )
            },
        ),
        entry(
            Confidentiality,
            Low,
            ComponentDetails {
                protection_method: Some("Basic access control".to_string()),
                classification: Some("Internal".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Keeps honest people out; determined attackers and insiders are not addressed.".to_string(),
                    financial: Option::None,
                    operational: Option::None,
                    reputational: detail(
                        "An internal-data leak would be embarrassing but usually survivable.",
                        RiskLevel::High,
                    ),
                    regulatory: detail(
                        "Password-only protection falls short for personal or payment data.",
                        RiskLevel::High,
                    ),
                    strategic: Option::None,
                }),
                ..base(
                    Low,
                    "Basic confidentiality: password authentication and transport encryption.",
                    "Shared-role accounts, TLS in transit, no at-rest encryption, minimal access review.",
                    "Casual snooping is prevented; credential theft or insider access still exposes internal data.",
                    5.0,
                    5.0,
                    &[
                        "Move to individual accounts with role-based access",
                        "Encrypt sensitive data at rest",
                        "Start periodic access reviews",
                    ],
                )
            },
        ),
        entry(
            Confidentiality,
            Moderate,
            ComponentDetails {
                protection_method: Some("Standard encryption".to_string()),
                classification: Some("Confidential".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Industry-standard protection appropriate for ordinary customer and business data.".to_string(),
                    financial: detail(
                        "Breach costs are contained by encryption and limited blast radius.",
                        RiskLevel::Medium,
                    ),
                    operational: Option::None,
                    reputational: detail(
                        "Demonstrable standard controls soften the fallout of an incident.",
                        RiskLevel::Medium,
                    ),
                    regulatory: detail(
                        "Meets the baseline expected by common privacy regulation for ordinary personal data.",
                        RiskLevel::Low,
                    ),
                    strategic: Option::None,
                }),
                ..base(
                    Moderate,
                    "Standard confidentiality: role-based access control with encryption at rest and in transit.",
                    "RBAC with individual accounts, AES-256 at rest, TLS 1.2+ in transit, centralized secret management.",
                    "Customer and business data is protected to the level regulators and partners generally expect.",
                    15.0,
                    20.0,
                    &[
                        "Add multi-factor authentication for privileged access",
                        "Introduce data loss prevention monitoring",
                        "Rotate and audit encryption keys on a schedule",
                    ],
                )
            },
        ),
        entry(
            Confidentiality,
            High,
            ComponentDetails {
                protection_method: Some("End-to-end encryption with strict access control".to_string()),
                classification: Some("Restricted".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Strong protection for regulated and high-value data; insiders are constrained too.".to_string(),
                    financial: detail(
                        "Breach exposure is sharply reduced; most incidents end as non-events.",
                        RiskLevel::Low,
                    ),
                    operational: detail(
                        "Least-privilege and MFA add friction that must be managed.",
                        RiskLevel::Low,
                    ),
                    reputational: detail(
                        "Handling of sensitive data can be credibly defended to customers and press.",
                        RiskLevel::Low,
                    ),
                    regulatory: detail(
                        "Satisfies heightened requirements for health, payment and similar data.",
                        RiskLevel::Low,
                    ),
                    strategic: Option::None,
                }),
                ..base(
                    High,
                    "High confidentiality: end-to-end encryption, MFA everywhere, least-privilege access.",
                    "E2E encryption for sensitive flows, enforced MFA, just-in-time privileged access, continuous access monitoring.",
                    "Appropriate for regulated personal, payment and health data; insider misuse is constrained and logged.",
                    30.0,
                    40.0,
                    &[
                        "Adopt just-in-time elevation for administrative access",
                        "Monitor and alert on anomalous data access patterns",
                        "Extend end-to-end encryption to internal service links",
                    ],
                )
            },
        ),
        entry(
            Confidentiality,
            VeryHigh,
            ComponentDetails {
                protection_method: Some("Zero-trust with quantum-resistant encryption".to_string()),
                classification: Some("Top Secret".to_string()),
                business_impact_details: Some(BusinessImpactDetails {
                    summary: "Protection engineered against nation-state grade adversaries and future decryption.".to_string(),
                    financial: detail(
                        "Standing control costs dominate; breach probability is driven toward zero.",
                        RiskLevel::Minimal,
                    ),
                    operational: detail(
                        "Zero-trust verification applies to every request, including internal ones.",
                        RiskLevel::Low,
                    ),
                    reputational: detail(
                        "Suitable for custodianship of the most sensitive third-party secrets.",
                        RiskLevel::Minimal,
                    ),
                    regulatory: detail(
                        "Exceeds current regulatory requirements across sectors.",
                        RiskLevel::Minimal,
                    ),
                    strategic: detail(
                        "Qualifies the organization for defense and critical-infrastructure work.",
                        RiskLevel::Minimal,
                    ),
                }),
                ..base(
                    VeryHigh,
                    "Maximum confidentiality: zero-trust architecture with quantum-resistant cryptography.",
                    "Zero-trust segmentation, post-quantum algorithms for long-lived secrets, hardware security modules, full DLP.",
                    "Designed for state-grade threats and decades-long secrecy requirements.",
                    50.0,
                    60.0,
                    &[
                        "Inventory long-lived secrets and migrate them to post-quantum algorithms",
                        "Segment networks to per-workload trust zones",
                        "Commission regular red-team exercises against the control set",
                    ],
                )
            },
        ),
    ]
}

fn roi_entries() -> Vec<RoiEntry> {
    use SecurityLevel::*;

    let estimate = |level: SecurityLevel, return_rate: &str, description: &str| RoiEntry {
        level,
        estimate: RoiEstimate {
            return_rate: return_rate.to_string(),
            description: description.to_string(),
        },
    };

    vec![
        estimate(
            None,
            "0%",
            "No security investment yields no return and leaves incident costs uncapped.",
        ),
        estimate(
            Low,
            "100%",
            "Basic controls typically pay for themselves by preventing commodity incidents.",
        ),
        estimate(
            Moderate,
            "150%",
            "Standard controls return about one and a half times their cost in avoided losses.",
        ),
        estimate(
            High,
            "300%",
            "Strong protection substantially reduces breach probability and expected loss.",
        ),
        estimate(
            VeryHigh,
            "500%",
            "Maximum protection maximizes avoided-loss returns for high-value targets.",
        ),
    ]
}

fn build() -> Dataset {
    let mut components = availability_entries();
    components.extend(integrity_entries());
    components.extend(confidentiality_entries());

    Dataset {
        components,
        roi_estimates: roi_entries(),
    }
}
