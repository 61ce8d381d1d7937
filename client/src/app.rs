//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use rest::ApiConfig;

use crate::components::layout::Layout;
use crate::pages::{
    artifacts::ArtifactsPage,
    audit::AuditPage,
    catalog_components::{ComponentEditPage, ComponentNewPage, ComponentsPage},
    catalog_templates::{TemplateEditPage, TemplateNewPage, TemplatesPage},
    cbam::{CbamNewPage, CbamPage},
    cbam_library::{CbamFactorsPage, CbamSuppliersPage},
    compliance::CompliancePage,
    home::HomePage,
    jobs::{ExportJobsPage, ImportJobsPage},
    not_found::NotFoundPage,
    passport_detail::PassportDetailPage,
    passport_edit::PassportEditPage,
    passport_new::PassportNewPage,
    passports::PassportsPage,
    scan::ScanPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The server provides its `ApiConfig` before rendering; in the browser the
/// config is resolved from the values baked into the bundle.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_env);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/passport-studio.css"/>
        <Title text="Battery Passport Studio"/>

        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("passports") view=PassportsPage/>
                    <Route path=(StaticSegment("passports"), StaticSegment("new")) view=PassportNewPage/>
                    <Route path=(StaticSegment("passports"), ParamSegment("id")) view=PassportDetailPage/>
                    <Route
                        path=(StaticSegment("passports"), ParamSegment("id"), StaticSegment("edit"))
                        view=PassportEditPage
                    />
                    <Route path=(StaticSegment("scan"), ParamSegment("id")) view=ScanPage/>
                    <Route path=(StaticSegment("catalog"), StaticSegment("components")) view=ComponentsPage/>
                    <Route
                        path=(StaticSegment("catalog"), StaticSegment("components"), StaticSegment("new"))
                        view=ComponentNewPage
                    />
                    <Route
                        path=(StaticSegment("catalog"), StaticSegment("components"), ParamSegment("id"))
                        view=ComponentEditPage
                    />
                    <Route path=(StaticSegment("catalog"), StaticSegment("templates")) view=TemplatesPage/>
                    <Route
                        path=(StaticSegment("catalog"), StaticSegment("templates"), StaticSegment("new"))
                        view=TemplateNewPage
                    />
                    <Route
                        path=(StaticSegment("catalog"), StaticSegment("templates"), ParamSegment("id"))
                        view=TemplateEditPage
                    />
                    <Route path=(StaticSegment("jobs"), StaticSegment("imports")) view=ImportJobsPage/>
                    <Route path=(StaticSegment("jobs"), StaticSegment("exports")) view=ExportJobsPage/>
                    <Route path=StaticSegment("cbam") view=CbamPage/>
                    <Route path=(StaticSegment("cbam"), StaticSegment("new")) view=CbamNewPage/>
                    <Route path=(StaticSegment("cbam"), StaticSegment("suppliers")) view=CbamSuppliersPage/>
                    <Route path=(StaticSegment("cbam"), StaticSegment("factors")) view=CbamFactorsPage/>
                    <Route path=StaticSegment("compliance") view=CompliancePage/>
                    <Route path=StaticSegment("audit") view=AuditPage/>
                    <Route path=StaticSegment("artifacts") view=ArtifactsPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
