use crate::record::Record;

pub mod vrm0;
pub mod vrm1;
pub mod vrmc;

/// Where a glTF extension object is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Root,
    Material,
    Node,
}

/// A record stored under a named glTF extension.
pub trait Extension: Record {
    const KEY: &'static str;
    const PLACEMENT: Placement;
}

/// Declares a `HumanBones` record with one slot per humanoid bone.
///
/// Required slots hold a `HumanBone`, the rest an `Option<HumanBone>`.
/// `HumanBone` resolves in the invoking module.
macro_rules! human_bones {
    (
        $(#[$meta:meta])*
        pub struct $name:ident $([$mode:ident])? {
            required { $($required:ident => $required_key:literal,)* }
            optional { $($optional:ident => $optional_key:literal,)* }
        }
    ) => {
        $crate::record::record! {
            $(#[$meta])*
            pub struct $name $([$mode])? {
                $($required: HumanBone => $required_key, required;)*
                $($optional: Option<HumanBone> => $optional_key, omit_default;)*
            }
        }

        impl $name {
            pub const REQUIRED_BONES: &'static [&'static str] = &[$($required_key),*];

            /// Every mapped bone with its wire name.
            pub fn iter(&self) -> impl Iterator<Item = (&'static str, &HumanBone)> + '_ {
                [
                    $(($required_key, Some(&self.$required)),)*
                    $(($optional_key, self.$optional.as_ref()),)*
                ]
                .into_iter()
                .filter_map(|(name, bone)| bone.map(|bone| (name, bone)))
            }

            pub fn get(&self, name: &str) -> Option<&HumanBone> {
                self.iter()
                    .find(|(candidate, _)| *candidate == name)
                    .map(|(_, bone)| bone)
            }
        }
    };
}

pub(crate) use human_bones;
