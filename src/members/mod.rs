// Member Model
//
// Each member has:
// - Stable numeric identity assigned by the roster
// - Shared base attributes (name, age, team, salary, join date)
// - One of three role payloads (player, coach, manager)
// - Owned training and payment records

pub mod member;
pub mod role;

pub use member::{
    today, Member, MemberDraft, MemberId, Payable, PaymentRecord, PaymentResult, Trainable,
    TrainingRecord,
};
pub use role::{CoachProfile, ManagerProfile, PlayerProfile, Role, RoleProfile};
