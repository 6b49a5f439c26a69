use crate::config::Config;
use crate::release::ReleaseSession;

/// The exact command lines of one release, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub stage_all: String,
    pub build_commit: String,
    pub bump_manifest: String,
    pub changelog: String,
    pub stage_changelog: String,
    pub changelog_commit: String,
    pub tag: String,
    /// The only step whose result is checked
    pub push_tag: String,
    pub push_commits: String,
    pub publish: String,
}

impl ReleasePlan {
    pub fn new(config: &Config, session: &ReleaseSession) -> Self {
        let version = &session.version;
        let vcs_tag = format!("v{}", version);
        let pm = &config.package_manager;

        let publish = if config.publish_with_release_tag {
            format!("{} publish --tag {}", pm, session.tag)
        } else {
            format!("{} publish", pm)
        };

        ReleasePlan {
            stage_all: "git add -A".to_string(),
            build_commit: format!("git commit -m \"[build] {}\"", vcs_tag),
            bump_manifest: format!(
                "{} --no-git-tag-version version {} --message \"[release] {} {}\"",
                pm, version, version, session.tag
            ),
            changelog: format!(
                "{} -p {} -i {} -s",
                config.changelog.command, config.changelog.preset, config.changelog.file
            ),
            stage_changelog: "git add .".to_string(),
            // "CHANGLOG" spelling matches earlier release commits
            changelog_commit: format!("git commit -m \"chore: update CHANGLOG {}\"", version),
            tag: format!("git tag {}", vcs_tag),
            push_tag: format!("git push {} refs/tags/{}", config.remote, vcs_tag),
            push_commits: "git push".to_string(),
            publish,
        }
    }

    /// Every command in execution order
    pub fn commands(&self) -> Vec<String> {
        vec![
            self.stage_all.clone(),
            self.build_commit.clone(),
            self.bump_manifest.clone(),
            self.changelog.clone(),
            self.stage_changelog.clone(),
            self.changelog_commit.clone(),
            self.tag.clone(),
            self.push_tag.clone(),
            self.push_commits.clone(),
            self.publish.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(version: &str, tag: &str) -> ReleaseSession {
        ReleaseSession {
            version: version.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_default_templates() {
        let plan = ReleasePlan::new(&Config::default(), &session("1.5.0", "v1.5.0"));

        assert_eq!(
            plan.commands(),
            vec![
                "git add -A",
                "git commit -m \"[build] v1.5.0\"",
                "npm --no-git-tag-version version 1.5.0 --message \"[release] 1.5.0 v1.5.0\"",
                "node_modules/.bin/conventional-changelog -p angular -i CHANGELOG.md -s",
                "git add .",
                "git commit -m \"chore: update CHANGLOG 1.5.0\"",
                "git tag v1.5.0",
                "git push origin refs/tags/v1.5.0",
                "git push",
                "npm publish",
            ]
        );
    }

    #[test]
    fn test_release_tag_only_reaches_version_message_by_default() {
        let plan = ReleasePlan::new(&Config::default(), &session("2.0.0", "next"));
        assert!(plan.bump_manifest.ends_with("\"[release] 2.0.0 next\""));
        assert_eq!(plan.tag, "git tag v2.0.0");
        assert_eq!(plan.publish, "npm publish");
    }

    #[test]
    fn test_publish_with_release_tag() {
        let config = Config {
            publish_with_release_tag: true,
            ..Config::default()
        };
        let plan = ReleasePlan::new(&config, &session("2.0.0", "next"));
        assert_eq!(plan.publish, "npm publish --tag next");
    }

    #[test]
    fn test_configured_remote_and_package_manager() {
        let config = Config {
            remote: "upstream".to_string(),
            package_manager: "pnpm".to_string(),
            ..Config::default()
        };
        let plan = ReleasePlan::new(&config, &session("0.2.0", "v0.2.0"));
        assert_eq!(plan.push_tag, "git push upstream refs/tags/v0.2.0");
        assert!(plan.bump_manifest.starts_with("pnpm --no-git-tag-version version 0.2.0"));
        assert_eq!(plan.publish, "pnpm publish");
    }
}
