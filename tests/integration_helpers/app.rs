use std::sync::Arc;

use log::debug;
use once_cell::sync::Lazy;
use poke_advisor::data::dex::Dex;
use poke_advisor::helpers::env::load_optional_dotenv;

#[macro_export]
macro_rules! init_test_service {
    ($app_var:ident, $service_var:ident) => {
        let $app_var = $crate::integration_helpers::app::TestApp::new();
        let $service_var =
            actix_web::test::init_service(poke_advisor::advisor_app!($app_var.get_dex())).await;
    };
}

pub struct TestApp {
    dex: Arc<Dex>,
}

impl TestApp {
    pub fn new() -> Self {
        static TEST_DEX: Lazy<Arc<Dex>> = Lazy::new(|| {
            debug!("Loading environment variables");
            load_optional_dotenv().unwrap();

            debug!("Loading embedded advisor data for tests");
            Arc::new(Dex::load_default().unwrap())
        });

        Self { dex: TEST_DEX.clone() }
    }

    pub fn get_dex(&self) -> Arc<Dex> {
        self.dex.clone()
    }
}
