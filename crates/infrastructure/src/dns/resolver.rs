use super::answer_parser::AnswerParser;
use super::error_mapping::to_resolver_error;
use async_trait::async_trait;
use ferrous_dig_application::ports::{
    RawAddressRecord, RawMxRecord, RawTxtRecord, RecordResolver, ResolverError,
};
use ferrous_dig_domain::config::ResolverConfig;
use ferrous_dig_domain::DomainError;
use hickory_resolver::config::{
    NameServerConfig, Protocol, ResolverConfig as HickoryResolverConfig, ResolverOpts,
};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::rr::RecordType as HickoryRecordType;
use hickory_resolver::TokioAsyncResolver;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, info};

/// [`RecordResolver`] backed by hickory's async resolver.
///
/// Uses the system configuration unless nameservers are configured.
/// Query timeout and attempts are applied here.
pub struct SystemRecordResolver {
    resolver: TokioAsyncResolver,
}

impl SystemRecordResolver {
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let (hickory_config, mut opts) = if config.uses_system_conf() {
            hickory_resolver::system_conf::read_system_conf()
                .map_err(|e| DomainError::ResolverUnavailable(e.to_string()))?
        } else {
            (
                Self::explicit_config(&config.nameservers)?,
                ResolverOpts::default(),
            )
        };

        opts.timeout = Duration::from_secs(config.timeout_secs);
        opts.attempts = config.attempts;

        info!(
            system_conf = config.uses_system_conf(),
            nameservers = hickory_config.name_servers().len(),
            timeout_secs = config.timeout_secs,
            attempts = config.attempts,
            "Resolver initialized"
        );

        Ok(Self::new(TokioAsyncResolver::tokio(hickory_config, opts)))
    }

    fn explicit_config(nameservers: &[String]) -> Result<HickoryResolverConfig, DomainError> {
        let mut hickory_config = HickoryResolverConfig::new();
        for server in nameservers {
            let addr: SocketAddr = server.parse().map_err(|_| {
                DomainError::ResolverUnavailable(format!("invalid nameserver address: {}", server))
            })?;
            hickory_config.add_name_server(NameServerConfig::new(addr, Protocol::Udp));
            hickory_config.add_name_server(NameServerConfig::new(addr, Protocol::Tcp));
        }
        Ok(hickory_config)
    }

    async fn lookup(
        &self,
        hostname: &str,
        record_type: HickoryRecordType,
    ) -> Result<Lookup, ResolverError> {
        let lookup = self
            .resolver
            .lookup(hostname, record_type)
            .await
            .map_err(to_resolver_error)?;

        debug!(
            hostname = %hostname,
            record_type = %record_type,
            answers = lookup.records().len(),
            "Lookup answered"
        );
        Ok(lookup)
    }
}

#[async_trait]
impl RecordResolver for SystemRecordResolver {
    async fn resolve_a(&self, hostname: &str) -> Result<Vec<RawAddressRecord>, ResolverError> {
        let lookup = self.lookup(hostname, HickoryRecordType::A).await?;
        Ok(AnswerParser::addresses(lookup.records()))
    }

    async fn resolve_aaaa(&self, hostname: &str) -> Result<Vec<RawAddressRecord>, ResolverError> {
        let lookup = self.lookup(hostname, HickoryRecordType::AAAA).await?;
        Ok(AnswerParser::addresses(lookup.records()))
    }

    async fn resolve_mx(&self, hostname: &str) -> Result<Vec<RawMxRecord>, ResolverError> {
        let lookup = self.lookup(hostname, HickoryRecordType::MX).await?;
        Ok(AnswerParser::mail_exchangers(lookup.records()))
    }

    async fn resolve_txt(&self, hostname: &str) -> Result<Vec<RawTxtRecord>, ResolverError> {
        let lookup = self.lookup(hostname, HickoryRecordType::TXT).await?;
        Ok(AnswerParser::texts(lookup.records()))
    }

    async fn resolve_ns(&self, hostname: &str) -> Result<Vec<String>, ResolverError> {
        let lookup = self.lookup(hostname, HickoryRecordType::NS).await?;
        Ok(AnswerParser::nameservers(lookup.records()))
    }
}
