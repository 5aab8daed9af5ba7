#[cfg(test)]
mod test {

    use crate::auth::credentials::AuthCredentials;
    use crate::config::types::{ClientConfig, TlsVersion};

    #[test]
    fn unset_paths_resolve_to_service_defaults_at_build_time() {
        let config = ClientConfig::builder().build();

        assert_eq!(config.marathon_path(), "/service/marathon");
        assert_eq!(config.metronome_path(), "/service/metronome");
        assert_eq!(config.insecure_skip_tls_verify(), false);
        assert!(config.credentials().is_none());
        assert!(config.ca_cert_data().is_none());
        assert!(config.ca_cert_file().is_none());
        assert!(config.tls_versions().is_none());
    }

    #[test]
    fn explicit_fields_land_in_the_config() {
        let creds = AuthCredentials::for_user_account("admin", "secret");
        let config = ClientConfig::builder()
            .with_credentials(creds.clone())
            .insecure_skip_tls_verify()
            .with_ca_cert_data("bm90LWEtY2VydA")
            .with_ca_cert_file("/run/dcos/ca.pem")
            .with_marathon_path("/marathon-ha")
            .with_metronome_path("/metronome-ha")
            .with_tls_versions(vec![TlsVersion::Tls1_2, TlsVersion::Tls1_3])
            .build();

        assert_eq!(config.credentials(), Some(&creds));
        assert_eq!(config.insecure_skip_tls_verify(), true);
        assert_eq!(config.ca_cert_data(), Some("bm90LWEtY2VydA"));
        assert_eq!(
            config.ca_cert_file().map(|p| p.display().to_string()),
            Some("/run/dcos/ca.pem".to_owned())
        );
        assert_eq!(config.marathon_path(), "/marathon-ha");
        assert_eq!(config.metronome_path(), "/metronome-ha");
        assert_eq!(
            config.tls_versions(),
            Some(&[TlsVersion::Tls1_2, TlsVersion::Tls1_3][..])
        );
    }

    #[test]
    fn seeded_builder_copies_everything_and_leaves_the_seed_alone() {
        let original = ClientConfig::builder()
            .with_credentials(AuthCredentials::for_service_account("svc", "login-jwt"))
            .with_insecure_skip_tls_verify(true)
            .with_metronome_path("/metronome-ha")
            .with_tls_versions(vec![TlsVersion::Tls1_2])
            .build();

        let modified = ClientConfig::builder_from(&original)
            .with_marathon_path("/x")
            .build();

        // differs only in the marathon path
        assert_eq!(modified.marathon_path(), "/x");
        assert_eq!(
            ClientConfig::builder_from(&modified)
                .with_marathon_path(original.marathon_path())
                .build(),
            original
        );

        // the seed config itself is untouched
        assert_eq!(original.marathon_path(), "/service/marathon");
        assert_eq!(original.metronome_path(), "/metronome-ha");
        assert_eq!(original.tls_versions(), Some(&[TlsVersion::Tls1_2][..]));
    }

    #[test]
    fn cert_data_and_cert_file_may_coexist() {
        // mutual exclusivity is intentionally not enforced at build time
        let config = ClientConfig::builder()
            .with_ca_cert_data("bm90LWEtY2VydA")
            .with_ca_cert_file("/run/dcos/ca.pem")
            .build();

        assert!(config.ca_cert_data().is_some());
        assert!(config.ca_cert_file().is_some());
    }
}
