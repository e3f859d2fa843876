use rand::{distributions::Alphanumeric, rngs::OsRng, Rng as _};
use zeroize::Zeroizing;

pub(crate) const BOOTSTRAP_CREDENTIAL_LENGTH: usize = 64;

/// Random credential for a freshly provisioned account. The account
/// authenticates through the identity provider, never with this value;
/// it only satisfies the store invariant that every account carries a
/// credential, and is dropped zeroed right after the insert.
pub(crate) fn generate_bootstrap_credential() -> Zeroizing<String> {
    Zeroizing::new(OsRng.sample_iter(&Alphanumeric).take(BOOTSTRAP_CREDENTIAL_LENGTH).map(char::from).collect())
}
