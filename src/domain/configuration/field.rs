//! Static schema of the onboarding record.
//!
//! Each field maps to one environment variable (the upper-cased field name)
//! and one template placeholder (the lower-cased field name wrapped in `${}`).

/// Case normalization applied to a field value at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
    Preserve,
}

impl Case {
    pub fn apply(self, value: &str) -> String {
        match self {
            Case::Lower => value.to_lowercase(),
            Case::Upper => value.to_uppercase(),
            Case::Preserve => value.to_string(),
        }
    }
}

/// A field of the onboarding record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Action,
    Swci,
    Suffix,
    Region,
    OpEnvironment,
    ResourceQuotaCpu,
    ResourceQuotaMemoryGb,
    ResourceQuotaStorageGb,
    BillingReference,
    Source,
    SwcId,
    DataClassification,
    AppSubDomain,
    AllowAccessFromNs,
    RequestedBy,
    Sub,
    Rg,
    ClusterName,
    Id,
    NamespaceName,
    AksClusterResourceId,
    GitLabRepoUrl,
    BranchName,
    FolderPath,
    FullDomainName,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 25] = [
        Field::Action,
        Field::Swci,
        Field::Suffix,
        Field::Region,
        Field::OpEnvironment,
        Field::ResourceQuotaCpu,
        Field::ResourceQuotaMemoryGb,
        Field::ResourceQuotaStorageGb,
        Field::BillingReference,
        Field::Source,
        Field::SwcId,
        Field::DataClassification,
        Field::AppSubDomain,
        Field::AllowAccessFromNs,
        Field::RequestedBy,
        Field::Sub,
        Field::Rg,
        Field::ClusterName,
        Field::Id,
        Field::NamespaceName,
        Field::AksClusterResourceId,
        Field::GitLabRepoUrl,
        Field::BranchName,
        Field::FolderPath,
        Field::FullDomainName,
    ];

    /// Field name as it appears in the record schema.
    pub fn name(self) -> &'static str {
        match self {
            Field::Action => "Action",
            Field::Swci => "Swci",
            Field::Suffix => "Suffix",
            Field::Region => "Region",
            Field::OpEnvironment => "OpEnvironment",
            Field::ResourceQuotaCpu => "ResourceQuotaCPU",
            Field::ResourceQuotaMemoryGb => "ResourceQuotaMemoryGB",
            Field::ResourceQuotaStorageGb => "ResourceQuotaStorageGB",
            Field::BillingReference => "BillingReference",
            Field::Source => "Source",
            Field::SwcId => "SwcID",
            Field::DataClassification => "DataClassification",
            Field::AppSubDomain => "AppSubDomain",
            Field::AllowAccessFromNs => "AllowAccessFromNS",
            Field::RequestedBy => "RequestedBy",
            Field::Sub => "Sub",
            Field::Rg => "Rg",
            Field::ClusterName => "ClusterName",
            Field::Id => "ID",
            Field::NamespaceName => "NamespaceName",
            Field::AksClusterResourceId => "AksClusterResourceId",
            Field::GitLabRepoUrl => "GitLabRepoURL",
            Field::BranchName => "BranchName",
            Field::FolderPath => "FolderPath",
            Field::FullDomainName => "FullDomainName",
        }
    }

    /// Environment variable holding the field, or `None` for generated fields.
    pub fn env_var(self) -> Option<&'static str> {
        match self {
            Field::Action => Some("ACTION"),
            Field::Swci => Some("SWCI"),
            Field::Suffix => Some("SUFFIX"),
            Field::Region => Some("REGION"),
            Field::OpEnvironment => Some("OPENVIRONMENT"),
            Field::ResourceQuotaCpu => Some("RESOURCEQUOTACPU"),
            Field::ResourceQuotaMemoryGb => Some("RESOURCEQUOTAMEMORYGB"),
            Field::ResourceQuotaStorageGb => Some("RESOURCEQUOTASTORAGEGB"),
            Field::BillingReference => Some("BILLINGREFERENCE"),
            Field::Source => Some("SOURCE"),
            Field::SwcId => Some("SWCID"),
            Field::DataClassification => Some("DATACLASSIFICATION"),
            Field::AppSubDomain => Some("APPSUBDOMAIN"),
            Field::AllowAccessFromNs => Some("ALLOWACCESSFROMNS"),
            Field::RequestedBy => Some("REQUESTEDBY"),
            Field::Sub => Some("SUB"),
            Field::Rg => Some("RG"),
            Field::ClusterName => Some("CLUSTERNAME"),
            Field::Id => None,
            Field::NamespaceName => Some("NAMESPACENAME"),
            Field::AksClusterResourceId => Some("AKSCLUSTERRESOURCEID"),
            Field::GitLabRepoUrl => Some("GITLABREPOURL"),
            Field::BranchName => Some("BRANCHNAME"),
            Field::FolderPath => Some("FOLDERPATH"),
            Field::FullDomainName => Some("FULLDOMAINNAME"),
        }
    }

    /// Key used inside `${...}` placeholders.
    pub fn placeholder_key(self) -> &'static str {
        match self {
            Field::Action => "action",
            Field::Swci => "swci",
            Field::Suffix => "suffix",
            Field::Region => "region",
            Field::OpEnvironment => "openvironment",
            Field::ResourceQuotaCpu => "resourcequotacpu",
            Field::ResourceQuotaMemoryGb => "resourcequotamemorygb",
            Field::ResourceQuotaStorageGb => "resourcequotastoragegb",
            Field::BillingReference => "billingreference",
            Field::Source => "source",
            Field::SwcId => "swcid",
            Field::DataClassification => "dataclassification",
            Field::AppSubDomain => "appsubdomain",
            Field::AllowAccessFromNs => "allowaccessfromns",
            Field::RequestedBy => "requestedby",
            Field::Sub => "sub",
            Field::Rg => "rg",
            Field::ClusterName => "clustername",
            Field::Id => "id",
            Field::NamespaceName => "namespacename",
            Field::AksClusterResourceId => "aksclusterresourceid",
            Field::GitLabRepoUrl => "gitlabrepourl",
            Field::BranchName => "branchname",
            Field::FolderPath => "folderpath",
            Field::FullDomainName => "fulldomainname",
        }
    }

    /// Full placeholder token, e.g. `${region}`.
    pub fn placeholder(self) -> String {
        format!("${{{}}}", self.placeholder_key())
    }

    /// Look up a field by its placeholder key.
    pub fn from_placeholder_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.placeholder_key() == key)
    }

    pub fn case(self) -> Case {
        match self {
            Field::BillingReference | Field::Source | Field::SwcId => Case::Upper,
            Field::ResourceQuotaCpu
            | Field::ResourceQuotaMemoryGb
            | Field::ResourceQuotaStorageGb
            | Field::Id
            | Field::AksClusterResourceId
            | Field::FullDomainName => Case::Preserve,
            _ => Case::Lower,
        }
    }

    /// Value used when the environment variable is unset or empty.
    pub(crate) fn static_default(self) -> Option<&'static str> {
        match self {
            Field::ResourceQuotaCpu => Some("4"),
            Field::ResourceQuotaMemoryGb => Some("8"),
            Field::ResourceQuotaStorageGb => Some("0"),
            _ => None,
        }
    }
}
