use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{
    fallback::StagePlan,
    language::{LanguageTables, Provider, Tier},
    stt::STT_PLAN,
    translation::TRANSLATION_PLAN,
    tts::TTS_PLAN,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogueEntry {
    pub provider: Provider,
    pub tier: Tier,
    pub code: String,
}

/// Response for GET /languages
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub translation: BTreeMap<String, Vec<CatalogueEntry>>,
    pub tts: BTreeMap<String, Vec<CatalogueEntry>>,
    pub stt: BTreeMap<String, Vec<CatalogueEntry>>,
}

/// Every named language with the codes each stage of the plan would use, in
/// chain order. Names missing from the map reach only the hard default.
fn catalogue(tables: &LanguageTables, plan: &[StagePlan]) -> BTreeMap<String, Vec<CatalogueEntry>> {
    let mut names = std::collections::BTreeSet::new();
    for step in plan {
        if let Some(table) = tables.table(step.provider) {
            names.extend(table.languages());
        }
    }

    names
        .into_iter()
        .map(|name| {
            let entries = plan
                .iter()
                .filter(|step| step.tier != Tier::HardDefault)
                .filter_map(|step| {
                    tables
                        .code_for(name, step.provider, step.tier)
                        .map(|code| CatalogueEntry {
                            provider: step.provider,
                            tier: step.tier,
                            code: code.to_string(),
                        })
                })
                .collect();
            (name.to_string(), entries)
        })
        .collect()
}

/// GET /languages - Supported languages per capability
pub async fn list_languages(State(tables): State<Arc<LanguageTables>>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        translation: catalogue(&tables, TRANSLATION_PLAN),
        tts: catalogue(&tables, TTS_PLAN),
        stt: catalogue(&tables, STT_PLAN),
    })
}
