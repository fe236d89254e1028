/// Authorization bucket an account can hold.
#[odra::odra_type]
pub enum Role {
    /// Grants and revokes roles, including its own.
    Admin = 0,
    /// Manages the type catalog and airdrops badges.
    Operator = 1,
}

impl Role {
    /// Role whose holders may grant and revoke this role.
    pub fn admin_role(&self) -> Role {
        match self {
            Role::Admin | Role::Operator => Role::Admin,
        }
    }
}

// implement conversion from role into u8
impl From<Role> for u8 {
    fn from(role: Role) -> u8 {
        role as u8
    }
}
