//! Idempotent seeding of fixed reference data.
//!
//! Regions, locales, and policy documents are upserted keyed by their stable
//! natural keys, so running the seeder repeatedly converges to the same
//! rows. Invoked from the admin CLI (`admin seed`).

use anyhow::Result;
use serde_json::json;
use sqlx::PgPool;

/// Row counts touched by one seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub regions: u64,
    pub locales: u64,
    pub policies: u64,
}

const REGIONS: &[(&str, &str)] = &[
    ("JJU", "Jeju Olle"),
    ("HLS", "Hallasan"),
    ("SRK", "Seoraksan"),
    ("JRS", "Jirisan"),
    ("BKH", "Bukhansan Dulle"),
];

const LOCALES: &[(&str, &str)] = &[
    ("ko-KR", "한국어"),
    ("en-US", "English"),
    ("ja-JP", "日本語"),
    ("zh-TW", "繁體中文"),
];

fn policy_content(paragraphs: &[&str]) -> String {
    let blocks: Vec<serde_json::Value> = paragraphs
        .iter()
        .map(|p| json!({ "type": "paragraph", "text": p }))
        .collect();
    serde_json::to_string(&blocks).expect("policy content serializes")
}

/// Upserts all reference rows. Safe to run any number of times.
pub async fn seed_reference_data(pool: &PgPool) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for (code, name) in REGIONS {
        let result = sqlx::query(
            r#"
            INSERT INTO regions (code, name) VALUES ($1, $2)
            ON CONFLICT (code) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(code)
        .bind(name)
        .execute(pool)
        .await?;
        summary.regions += result.rows_affected();
    }

    for (code, name) in LOCALES {
        let result = sqlx::query(
            r#"
            INSERT INTO locales (code, name) VALUES ($1, $2)
            ON CONFLICT (code) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(code)
        .bind(name)
        .execute(pool)
        .await?;
        summary.locales += result.rows_affected();
    }

    let policies = [
        (
            "terms",
            policy_content(&[
                "Passes are personal and non-transferable.",
                "Stages may close without notice during severe weather.",
            ]),
        ),
        (
            "privacy",
            policy_content(&[
                "Contact and travel-document details are used only for pass issuance.",
            ]),
        ),
        (
            "refund",
            policy_content(&[
                "Reserved passes are refundable until the start date.",
                "Active passes are refunded pro rata for unused days.",
            ]),
        ),
    ];

    for (kind, content) in policies {
        let result = sqlx::query(
            r#"
            INSERT INTO policies (kind, content) VALUES ($1, $2)
            ON CONFLICT (kind) DO UPDATE
                SET content = EXCLUDED.content, updated_at = now()
            "#,
        )
        .bind(kind)
        .bind(content)
        .execute(pool)
        .await?;
        summary.policies += result.rows_affected();
    }

    tracing::info!(
        regions = summary.regions,
        locales = summary.locales,
        policies = summary.policies,
        "reference data seeded"
    );

    Ok(summary)
}
