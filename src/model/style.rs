//! Style marker vocabulary shared with the documentation stylesheet.
//!
//! Every class name the pipeline emits is defined here. The stylesheet
//! (Bootstrap 3 plus the site's custom rules) gives them visual meaning.

use serde::{Deserialize, Serialize};

/// Class names emitted by the pipeline.
pub mod class {
    pub const PANEL: &str = "panel";
    pub const PANEL_HEADING: &str = "panel-heading";
    pub const PANEL_BODY: &str = "panel-body";
    pub const PANEL_FOOTER: &str = "panel-footer";
    pub const PANEL_DEFAULT: &str = "panel-default";
    pub const MEMBER_SECTION: &str = "member-section";
    pub const LIST_GROUP: &str = "list-group";
    pub const LIST_GROUP_ITEM: &str = "list-group-item";
    pub const LEAD: &str = "lead";
    pub const LABEL: &str = "label";
    pub const BADGE: &str = "badge";
    pub const TABLE: &str = "table";
    pub const CODE: &str = "code";
    pub const META_INFO_BLOCK: &str = "meta-info-block";
}

/// Class names produced by the documentation generator that the pipeline looks for.
pub mod source {
    pub const GROUP_HEADER: &str = "groupheader";
    pub const TEXT_BLOCK: &str = "textblock";
    pub const MEMBER_DOC: &str = "memdoc";
    pub const MEMBER_ITEM: &str = "memitem";
    pub const MEMBER_PROTO: &str = "memproto";
    pub const MLABEL: &str = "mlabel";
    pub const MLABELS: &str = "mlabels";
    pub const MLABELS_RIGHT: &str = "mlabels-right";
    pub const LINK: &str = "el";
    pub const DIRECTORY: &str = "directory";
    pub const ICON: &str = "icon";
    pub const DOX_TABLE: &str = "doxtable";
    pub const REFLIST: &str = "reflist";
    pub const PARAM_TABLES: [&str; 3] = ["params", "tparams", "exception"];
}

/// Visual severity shared by panels and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Primary,
    Success,
    Info,
    Danger,
    Warning,
    Default,
}

impl Severity {
    /// All severities, in stylesheet order.
    pub const ALL: [Severity; 6] = [
        Severity::Primary,
        Severity::Success,
        Severity::Info,
        Severity::Danger,
        Severity::Warning,
        Severity::Default,
    ];

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Primary => "primary",
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Default => "default",
        }
    }

    /// Panel modifier class (`panel-success`, ...).
    pub fn panel_class(&self) -> &'static str {
        match self {
            Severity::Primary => "panel-primary",
            Severity::Success => "panel-success",
            Severity::Info => "panel-info",
            Severity::Danger => "panel-danger",
            Severity::Warning => "panel-warning",
            Severity::Default => "panel-default",
        }
    }

    /// Label modifier class (`label-success`, ...).
    pub fn label_class(&self) -> &'static str {
        match self {
            Severity::Primary => "label-primary",
            Severity::Success => "label-success",
            Severity::Info => "label-info",
            Severity::Danger => "label-danger",
            Severity::Warning => "label-warning",
            Severity::Default => "label-default",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
