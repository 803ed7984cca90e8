//! Language customization of a user flow: the language configurations and
//! their default and overriding pages.

use graphid_core::ItemQueryParameters;

use crate::models::{UserFlowLanguageConfiguration, UserFlowLanguagePage};

pub const USER_FLOW_LANGUAGE_CONFIGURATION_ID: &str = "userFlowLanguageConfiguration%2Did";
pub const USER_FLOW_LANGUAGE_PAGE_ID: &str = "userFlowLanguagePage%2Did";

request_builder! {
    /// Provides operations to manage the languages property of the microsoft.graph.b2xIdentityUserFlow entity.
    LanguagesRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Retrieve a list of languages supported for customization in a B2X user flow.
    list(UserFlowLanguageConfiguration);
    post(UserFlowLanguageConfiguration) -> UserFlowLanguageConfiguration;
}

impl LanguagesRequestBuilder {
    pub fn by_user_flow_language_configuration_id(
        &self,
        id: impl Into<String>,
    ) -> UserFlowLanguageConfigurationItemRequestBuilder {
        self.base.child_with(USER_FLOW_LANGUAGE_CONFIGURATION_ID, id)
    }

    pub fn count(&self) -> LanguagesCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    LanguagesCountRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    UserFlowLanguageConfigurationItemRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/{userFlowLanguageConfiguration%2Did}{?%24expand,%24select}";
    /// Read the properties and relationships of a userFlowLanguageConfiguration object.
    get(ItemQueryParameters) -> UserFlowLanguageConfiguration;
    patch(UserFlowLanguageConfiguration) -> UserFlowLanguageConfiguration;
    delete;
}

impl UserFlowLanguageConfigurationItemRequestBuilder {
    pub fn default_pages(&self) -> DefaultPagesRequestBuilder {
        self.base.child()
    }

    pub fn overrides_pages(&self) -> OverridesPagesRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    /// Provides operations to manage the defaultPages property of the microsoft.graph.userFlowLanguageConfiguration entity.
    DefaultPagesRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/{userFlowLanguageConfiguration%2Did}/defaultPages{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get the userFlowLanguagePage resources from the defaultPages navigation property.
    list(UserFlowLanguagePage);
    post(UserFlowLanguagePage) -> UserFlowLanguagePage;
}

impl DefaultPagesRequestBuilder {
    pub fn by_user_flow_language_page_id(
        &self,
        id: impl Into<String>,
    ) -> DefaultPageItemRequestBuilder {
        self.base.child_with(USER_FLOW_LANGUAGE_PAGE_ID, id)
    }

    pub fn count(&self) -> DefaultPagesCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    DefaultPagesCountRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/{userFlowLanguageConfiguration%2Did}/defaultPages/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    DefaultPageItemRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/{userFlowLanguageConfiguration%2Did}/defaultPages/{userFlowLanguagePage%2Did}{?%24expand,%24select}";
    get(ItemQueryParameters) -> UserFlowLanguagePage;
    patch(UserFlowLanguagePage) -> UserFlowLanguagePage;
    delete;
}

impl DefaultPageItemRequestBuilder {
    pub fn content(&self) -> DefaultPageContentRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    /// Provides operations to manage the media for the identityContainer entity.
    DefaultPageContentRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/{userFlowLanguageConfiguration%2Did}/defaultPages/{userFlowLanguagePage%2Did}/$value";
    /// Get media content for the navigation property defaultPages from identity
    content;
}

request_builder! {
    /// Provides operations to manage the overridesPages property of the microsoft.graph.userFlowLanguageConfiguration entity.
    OverridesPagesRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/{userFlowLanguageConfiguration%2Did}/overridesPages{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get the userFlowLanguagePage resources from the overridesPages navigation property.
    list(UserFlowLanguagePage);
    post(UserFlowLanguagePage) -> UserFlowLanguagePage;
}

impl OverridesPagesRequestBuilder {
    pub fn by_user_flow_language_page_id(
        &self,
        id: impl Into<String>,
    ) -> OverridesPageItemRequestBuilder {
        self.base.child_with(USER_FLOW_LANGUAGE_PAGE_ID, id)
    }

    pub fn count(&self) -> OverridesPagesCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    OverridesPagesCountRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/{userFlowLanguageConfiguration%2Did}/overridesPages/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    OverridesPageItemRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/{userFlowLanguageConfiguration%2Did}/overridesPages/{userFlowLanguagePage%2Did}{?%24expand,%24select}";
    get(ItemQueryParameters) -> UserFlowLanguagePage;
    patch(UserFlowLanguagePage) -> UserFlowLanguagePage;
    delete;
}

impl OverridesPageItemRequestBuilder {
    pub fn content(&self) -> OverridesPageContentRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    OverridesPageContentRequestBuilder => "{+baseurl}/identity/b2xUserFlows/{b2xIdentityUserFlow%2Did}/languages/{userFlowLanguageConfiguration%2Did}/overridesPages/{userFlowLanguagePage%2Did}/$value";
    /// The overriding page content. Uploading replaces the page for the language.
    content;
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::StatusCode;

    use super::*;
    use crate::testing::RecordingAdapter;

    fn page_for(lang: &str) -> OverridesPageItemRequestBuilder {
        let (client, _) = RecordingAdapter::client();
        client
            .identity()
            .b2x_user_flows()
            .by_b2x_identity_user_flow_id("B2X_1_Partner")
            .languages()
            .by_user_flow_language_configuration_id(lang)
            .overrides_pages()
            .by_user_flow_language_page_id("idpSelections")
    }

    #[tokio::test]
    async fn download_default_page_content() {
        let (client, recorded) = RecordingAdapter::client();
        recorded.respond(StatusCode::OK, r#"{"LocalizedStrings":[]}"#);

        let content = client
            .identity()
            .b2x_user_flows()
            .by_b2x_identity_user_flow_id("B2X_1_Partner")
            .languages()
            .by_user_flow_language_configuration_id("en")
            .default_pages()
            .by_user_flow_language_page_id("idpSelections")
            .content()
            .get(None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(content, Bytes::from_static(br#"{"LocalizedStrings":[]}"#));
        let request = recorded.last();
        assert_eq!(
            request.url,
            "https://graph.test/v1.0/identity/b2xUserFlows/B2X_1_Partner/languages/en/defaultPages/idpSelections/$value"
        );
        assert_eq!(
            request.header("accept"),
            Some("application/octet-stream, application/json")
        );
    }

    #[tokio::test]
    async fn upload_overrides_page_content() {
        let (client, recorded) = RecordingAdapter::client();
        let page = client
            .identity()
            .b2x_user_flows()
            .by_b2x_identity_user_flow_id("B2X_1_Partner")
            .languages()
            .by_user_flow_language_configuration_id("es-ES")
            .overrides_pages()
            .by_user_flow_language_page_id("idpSelections");

        let body = Bytes::from_static(br#"{"LocalizedStrings":[{"ElementType":"UxElement"}]}"#);
        page.content().put(body.clone(), None).await.unwrap();

        let request = recorded.last();
        assert_eq!(request.method, http::Method::PUT);
        assert_eq!(
            request.url,
            "https://graph.test/v1.0/identity/b2xUserFlows/B2X_1_Partner/languages/es-ES/overridesPages/idpSelections/$value"
        );
        assert_eq!(request.header("content-type"), Some("application/octet-stream"));
        assert_eq!(request.raw_body, Some(body));
    }

    #[test]
    fn language_page_path_parameters() {
        let page = page_for("fr");
        let params = graphid_core::RequestBuilder::base(&page).path_parameters();
        assert_eq!(params.len(), 3);
        assert_eq!(params[USER_FLOW_LANGUAGE_CONFIGURATION_ID], "fr");
        assert_eq!(params[USER_FLOW_LANGUAGE_PAGE_ID], "idpSelections");
    }
}
