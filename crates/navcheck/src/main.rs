//! Startup self-check for the navigation configuration.
//!
//! Loads the registry the way the application shell does (`SMARTWILL_NAV_CONFIG`,
//! `SMARTWILL_NAV_MODE`), fails with a non-zero exit on any configuration error,
//! and prints each role's resolved tabs as JSON.
//!
//! `smartwill-navcheck <role> <tab>` additionally explains one access decision.

use std::collections::BTreeMap;

use anyhow::Context;
use serde::Serialize;

use smartwill_auth::{
    explain_tab_access, NavigationConfig, NavigationRegistry, NavigationTab, RegistryMode, Role,
    TabAccessExplanation, TabId,
};

#[derive(Debug, Serialize)]
struct Report {
    mode: RegistryMode,
    catalog: Vec<TabId>,
    roles: BTreeMap<Role, Vec<NavigationTab>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<TabAccessExplanation>,
}

fn main() -> anyhow::Result<()> {
    smartwill_observability::init_pretty();

    let config = NavigationConfig::from_env().context("loading navigation config")?;
    let registry: NavigationRegistry = config
        .into_registry()
        .context("navigation config failed its self-check")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let explanation = match args.as_slice() {
        [] => None,
        [role, tab] => {
            let role: Role = role.parse()?;
            Some(explain_tab_access(&registry, role, &TabId::new(tab.clone())))
        }
        _ => anyhow::bail!("usage: smartwill-navcheck [<role> <tab>]"),
    };

    let report = Report {
        mode: registry.mode(),
        catalog: registry.catalog().iter().map(|t| t.id.clone()).collect(),
        roles: Role::ALL
            .into_iter()
            .map(|role| (role, registry.resolve_tabs_for_role(role)))
            .collect(),
        explanation,
    };

    tracing::info!(mode = ?report.mode, "navigation config ok");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
