use reel_api_rest::RestServerConfig;
use reel_config::Config;
use reel_core_contact_impl::ContactFeatureConfig;
use reel_core_form_impl::ContactFormFeatureConfig;
use reel_core_health_impl::HealthFeatureConfig;
use reel_di::provider;
use reel_extern_impl::contact::ContactApiServiceConfig;
use reel_shared_impl::toast::ToastServiceConfig;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Extern
            ContactApiServiceConfig,

            // Shared
            ToastServiceConfig,

            // Core
            ContactFeatureConfig,
            ContactFormFeatureConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Extern
        contact_api_service_config: ContactApiServiceConfig,

        // Shared
        toast_service_config: ToastServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        contact_form_feature_config: ContactFormFeatureConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
        };

        // Extern
        let contact_api_service_config = ContactApiServiceConfig::new(&config.form.api_url)?;

        // Shared
        let toast_service_config = ToastServiceConfig {
            limit: config.toast.limit,
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            email: config.contact.email.clone().into(),
        };

        let contact_form_feature_config = ContactFormFeatureConfig {
            reset_delay: config.form.reset_delay.into(),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Ok(Self {
            _cache: Default::default(),
            rest_server_config,
            contact_api_service_config,
            toast_service_config,
            contact_feature_config,
            contact_form_feature_config,
            health_feature_config,
        })
    }
}
