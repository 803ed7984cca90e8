use graphid_core::ItemQueryParameters;

use crate::models::ConditionalAccessTemplate;

pub const CONDITIONAL_ACCESS_TEMPLATE_ID: &str = "conditionalAccessTemplate%2Did";

request_builder! {
    /// Provides operations to manage the templates property of the microsoft.graph.conditionalAccessRoot entity.
    TemplatesRequestBuilder => "{+baseurl}/identity/conditionalAccess/templates{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get a list of the conditionalAccessTemplate objects and their properties.
    list(ConditionalAccessTemplate);
}

impl TemplatesRequestBuilder {
    pub fn by_conditional_access_template_id(
        &self,
        id: impl Into<String>,
    ) -> ConditionalAccessTemplateItemRequestBuilder {
        self.base.child_with(CONDITIONAL_ACCESS_TEMPLATE_ID, id)
    }

    pub fn count(&self) -> TemplatesCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    TemplatesCountRequestBuilder => "{+baseurl}/identity/conditionalAccess/templates/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    ConditionalAccessTemplateItemRequestBuilder => "{+baseurl}/identity/conditionalAccess/templates/{conditionalAccessTemplate%2Did}{?%24expand,%24select}";
    /// Read the properties and relationships of a conditionalAccessTemplate object.
    get(ItemQueryParameters) -> ConditionalAccessTemplate;
}
