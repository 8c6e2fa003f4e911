//! Stack property resolution.
//!
//! The entrypoint reads CLI context and the process environment exactly
//! once, then threads the resolved values here by value. Nothing downstream
//! touches ambient state again.

use crate::context::Context;
use serde::Serialize;

pub const DEFAULT_PROJECT_NAME: &str = "minha-api";
pub const DEFAULT_ENVIRONMENT: &str = "prod";
pub const DEFAULT_REGION: &str = "us-east-1";

pub const STACK_DESCRIPTION: &str =
    "Infraestrutura para aplicação com ECS Fargate e Nginx Gateway";

/// Environment variables set by the deployment toolchain.
pub const ACCOUNT_VAR: &str = "CDK_DEFAULT_ACCOUNT";
pub const REGION_VAR: &str = "CDK_DEFAULT_REGION";

/// Target account/region for a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployEnv {
    /// Absent means the provider resolves the account at deploy time.
    /// There is deliberately no default here, unlike region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    pub region: String,
}

impl DeployEnv {
    /// Build from raw variable values. Account passes through verbatim;
    /// an absent or empty region falls back to us-east-1.
    pub fn from_vars(account: Option<String>, region: Option<String>) -> Self {
        DeployEnv {
            account,
            region: region
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
        }
    }

    /// Snapshot CDK_DEFAULT_ACCOUNT / CDK_DEFAULT_REGION from the process
    /// environment. Called once, in main.
    pub fn detect() -> Self {
        Self::from_vars(
            std::env::var(ACCOUNT_VAR).ok(),
            std::env::var(REGION_VAR).ok(),
        )
    }
}

/// Properties handed to the stack constructor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackProps {
    pub project_name: String,
    pub environment: String,
    pub env: DeployEnv,
    pub description: String,
}

impl StackProps {
    /// Resolve props for this run: `projectName` and `environment` from
    /// context with their defaults, the deployment environment as detected,
    /// and the fixed description.
    pub fn resolve(ctx: &Context, deploy: DeployEnv) -> Self {
        StackProps {
            project_name: ctx.get_or("projectName", DEFAULT_PROJECT_NAME),
            environment: ctx.get_or("environment", DEFAULT_ENVIRONMENT),
            env: deploy,
            description: STACK_DESCRIPTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_context_no_vars_resolves_all_defaults() {
        let props = StackProps::resolve(&Context::new(), DeployEnv::from_vars(None, None));
        assert_eq!(props.project_name, "minha-api");
        assert_eq!(props.environment, "prod");
        assert_eq!(props.env.account, None);
        assert_eq!(props.env.region, "us-east-1");
        assert_eq!(props.description, STACK_DESCRIPTION);
    }

    #[test]
    fn supplied_values_pass_through_verbatim() {
        let mut ctx = Context::new();
        ctx.set("projectName".into(), "billing-api".into());
        ctx.set("environment".into(), "staging".into());

        let props = StackProps::resolve(&ctx, DeployEnv::from_vars(None, Some("eu-west-1".into())));
        assert_eq!(props.project_name, "billing-api");
        assert_eq!(props.environment, "staging");
        assert_eq!(props.env.account, None);
        assert_eq!(props.env.region, "eu-west-1");
    }

    #[test]
    fn account_passes_through_without_defaulting() {
        let env = DeployEnv::from_vars(Some("123456789012".into()), None);
        assert_eq!(env.account.as_deref(), Some("123456789012"));
        assert_eq!(env.region, "us-east-1");
    }

    #[test]
    fn empty_region_falls_back() {
        let env = DeployEnv::from_vars(None, Some(String::new()));
        assert_eq!(env.region, "us-east-1");
    }

    #[test]
    fn unset_account_is_omitted_from_serialization() {
        let env = DeployEnv::from_vars(None, None);
        let json = serde_json::to_string(&env).unwrap();
        assert!(!json.contains("account"));
        assert!(json.contains("\"region\":\"us-east-1\""));
    }
}
