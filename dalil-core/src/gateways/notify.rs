use crate::entities::{EmployeeRequest, Message, Place, Subscription, UserProfile};

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    MessageReceived {
        message: &'a Message,
        recipient: &'a UserProfile,
    },
    EmploymentRequested {
        request: &'a EmployeeRequest,
        place: &'a Place,
    },
    EmploymentDecided {
        request: &'a EmployeeRequest,
        place: &'a Place,
    },
    UserSubscribed {
        user: &'a UserProfile,
        subscription: &'a Subscription,
    },
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
