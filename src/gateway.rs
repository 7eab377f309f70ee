use crate::purchase::AccountId;

/// Charges an account for the tickets it bought.
pub trait PaymentCharger {
    fn charge(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()>;
}

/// Reserves seats for an account.
pub trait SeatReserver {
    fn reserve(&self, account_id: AccountId, seats: u64) -> anyhow::Result<()>;
}

impl<T: PaymentCharger + ?Sized> PaymentCharger for &T {
    fn charge(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()> {
        (**self).charge(account_id, amount)
    }
}

impl<T: SeatReserver + ?Sized> SeatReserver for &T {
    fn reserve(&self, account_id: AccountId, seats: u64) -> anyhow::Result<()> {
        (**self).reserve(account_id, seats)
    }
}
