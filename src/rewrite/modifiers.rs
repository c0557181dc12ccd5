use crate::error::Result;
use log::trace;

use super::Transform;

/// Global literal substitution of one method signature for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierRewrite {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

pub const GET_NODE_DATA: ModifierRewrite = ModifierRewrite {
    name: "get-node-data",
    from: "public override JObject GetNodeData()",
    to: "protected internal override JObject GetNodeData()",
};

pub const SET_NODE_DATA: ModifierRewrite = ModifierRewrite {
    name: "set-node-data",
    from: "public override void SetNodeData(JObject jsonData)",
    to: "protected internal override void SetNodeData(JObject jsonData)",
};

impl Transform for ModifierRewrite {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str) -> Result<String> {
        trace!("{}: {} occurrence(s)", self.name, text.matches(self.from).count());
        Ok(text.replace(self.from, self.to))
    }
}
