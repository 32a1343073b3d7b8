pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, location_builder::*, user_builder::*};

pub mod location_builder {

    use super::*;
    use crate::{address::*, danger::*, geo::*, id::*, location::*, time::*, time_category::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.location.title = title.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.location.pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
            self
        }
        pub fn date(mut self, millis: i64) -> Self {
            self.location.date = Timestamp::from_millis(millis);
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.location.category = category.into();
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.location.description = description.into();
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.location.address = address;
            self
        }
        pub fn created_by(mut self, username: &str) -> Self {
            self.location.created_by = username.into();
            self
        }
        pub fn danger(mut self, danger: DangerLevel) -> Self {
            self.location.danger = danger;
            self
        }
        pub fn time_category(mut self, time_category: TimeCategory) -> Self {
            self.location.time_category = time_category;
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.location.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn images(mut self, images: Vec<impl Into<String>>) -> Self {
            self.location.images = images.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> Self::Build {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    title: "".into(),
                    pos: MapPoint::default(),
                    date: Timestamp::now(),
                    category: "".into(),
                    description: "".into(),
                    address: Address::default(),
                    created_by: "".into(),
                    danger: DangerLevel::default(),
                    time_category: TimeCategory::default(),
                    tags: vec![],
                    images: vec![DEFAULT_IMAGE_URL.into()],
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::user::*;

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.into();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    username: "".into(),
                    password: "".into(),
                    role: Role::default(),
                    name: "".into(),
                },
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn street(mut self, x: &str) -> Self {
            self.addr.street = Some(x.into());
            self
        }
        pub fn zip(mut self, x: &str) -> Self {
            self.addr.zip = Some(x.into());
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = Some(x.into());
            self
        }
        pub fn country(mut self, x: &str) -> Self {
            self.addr.country = Some(x.into());
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                addr: Default::default(),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn empty_by_default() {
            assert!(Address::build().finish().is_empty());
            assert!(!Address::build().street("x").finish().is_empty());
            assert!(!Address::build().zip("x").finish().is_empty());
            assert!(!Address::build().city("x").finish().is_empty());
            assert!(!Address::build().country("x").finish().is_empty());
        }
    }
}
