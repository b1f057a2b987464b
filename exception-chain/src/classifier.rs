use std::{convert::Infallible, str::FromStr};

/// The set of namespace prefixes that identify the reporting application's own code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectNamespaces(Vec<String>);

impl ProjectNamespaces {
    /// Prefixes are used exactly as given. Unlike parsing from a string, an empty prefix is
    /// kept, and matches every name.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProjectNamespaces(prefixes.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// Comma separated, surrounding whitespace trimmed. Blank entries are dropped, since an
// empty prefix would mark every frame as in-project.
impl FromStr for ProjectNamespaces {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProjectNamespaces::new(
            s.split(',').map(str::trim).filter(|p| !p.is_empty()),
        ))
    }
}

/// Decides whether a fully qualified type or class name belongs to the project.
#[derive(Debug, Clone, Default)]
pub struct ProjectClassifier {
    namespaces: Option<ProjectNamespaces>,
}

impl ProjectClassifier {
    pub fn new(namespaces: Option<ProjectNamespaces>) -> Self {
        Self { namespaces }
    }

    pub fn namespaces(&self) -> Option<&ProjectNamespaces> {
        self.namespaces.as_ref()
    }

    // Plain, case-sensitive prefix match against every configured namespace
    pub fn is_in_project(&self, fully_qualified_name: &str) -> bool {
        let Some(namespaces) = &self.namespaces else {
            return false;
        };

        namespaces
            .iter()
            .any(|prefix| fully_qualified_name.starts_with(prefix))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_prefix_matching() {
        let classifier =
            ProjectClassifier::new(Some(ProjectNamespaces::new(["MyApp", "com.example."])));

        assert!(classifier.is_in_project("MyApp.Widget"));
        assert!(classifier.is_in_project("MyAppExtras.Thing"));
        assert!(classifier.is_in_project("com.example.Foo"));
        assert!(!classifier.is_in_project("com.examples.Foo"));
        assert!(!classifier.is_in_project("System.String"));
        assert!(!classifier.is_in_project(""));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let classifier = ProjectClassifier::new(Some(ProjectNamespaces::new(["MyApp"])));

        assert!(!classifier.is_in_project("myapp.Widget"));
        assert!(!classifier.is_in_project("MYAPP.Widget"));
    }

    #[test]
    fn test_no_wildcards() {
        let classifier = ProjectClassifier::new(Some(ProjectNamespaces::new(["com.*"])));

        assert!(!classifier.is_in_project("com.example.Foo"));
        assert!(classifier.is_in_project("com.*literal"));
    }

    #[test]
    fn test_absent_or_empty_namespaces() {
        let absent = ProjectClassifier::new(None);
        let empty = ProjectClassifier::new(Some(ProjectNamespaces::default()));

        for name in ["MyApp.Widget", "", "java.lang.Object"] {
            assert!(!absent.is_in_project(name));
            assert!(!empty.is_in_project(name));
        }
    }

    #[test]
    fn test_parse_namespaces() {
        let parsed: ProjectNamespaces = " MyApp , com.example,, ".parse().unwrap();
        assert_eq!(parsed, ProjectNamespaces::new(["MyApp", "com.example"]));

        let parsed: ProjectNamespaces = "".parse().unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_programmatic_empty_prefix_is_kept() {
        let classifier = ProjectClassifier::new(Some(ProjectNamespaces::new([""])));
        assert!(classifier.is_in_project("java.lang.Object"));
    }
}
